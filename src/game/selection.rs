use serde::Serialize;

use crate::board::{Axis, Cell, Heading, LegalJumps};

/// One of the two ways to resolve a pending selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub axis: Axis,
    pub heading: Heading,
}

/// Click state. Only cells with jumps on both axes leave `Idle`; the board
/// is not touched until a direction is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    AwaitingChoice {
        cell: Cell,
        /// Horizontal option first
        options: [Choice; 2],
    },
}

impl Selection {
    /// Pending selection for `cell` if it has a jump on both axes.
    #[must_use]
    pub fn for_both_axes(cell: Cell, jumps: LegalJumps) -> Option<Selection> {
        match (jumps.horizontal, jumps.vertical) {
            (Some(h), Some(v)) => Some(Selection::AwaitingChoice {
                cell,
                options: [
                    Choice {
                        axis: Axis::Horizontal,
                        heading: h,
                    },
                    Choice {
                        axis: Axis::Vertical,
                        heading: v,
                    },
                ],
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_cell(&self) -> Option<Cell> {
        match self {
            Selection::Idle => None,
            Selection::AwaitingChoice { cell, .. } => Some(*cell),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Selection::AwaitingChoice { .. })
    }
}
