//! Legal jump computation.
//!
//! A jump is addressed by the cell in the middle of three colinear cells:
//! the middle holds a peg, one neighbor on the axis holds the jumping peg
//! and the other neighbor is the empty landing hole.

use serde::Serialize;

use super::state::Slot;
use super::{Axis, Board, Cell, Heading};

/// Legal jumps at one cell, at most one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LegalJumps {
    pub horizontal: Option<Heading>,
    pub vertical: Option<Heading>,
}

impl LegalJumps {
    pub const NONE: LegalJumps = LegalJumps {
        horizontal: None,
        vertical: None,
    };

    #[inline]
    #[must_use]
    pub const fn get(&self, axis: Axis) -> Option<Heading> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    /// Number of axes with a legal jump (0, 1 or 2)
    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.horizontal.is_some()) + usize::from(self.vertical.is_some())
    }

    /// The only legal axis, if exactly one axis is legal.
    #[must_use]
    pub fn single(&self) -> Option<(Axis, Heading)> {
        match (self.horizontal, self.vertical) {
            (Some(h), None) => Some((Axis::Horizontal, h)),
            (None, Some(v)) => Some((Axis::Vertical, v)),
            _ => None,
        }
    }

    /// Arrow glyphs, horizontal before vertical.
    #[must_use]
    pub fn arrows(&self) -> String {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .map(|h| h.glyph())
            .collect()
    }
}

impl Board {
    /// Recompute the legal-jump table for every cell.
    pub(crate) fn refresh_legal_moves(&mut self) {
        for cell in Cell::all() {
            let jumps = LegalJumps {
                horizontal: self.jump_heading(cell, Axis::Horizontal),
                vertical: self.jump_heading(cell, Axis::Vertical),
            };
            self.legal[cell.as_index()] = jumps;
        }
    }

    fn jump_heading(&self, cell: Cell, axis: Axis) -> Option<Heading> {
        if self.slot(cell) != Slot::Peg {
            return None;
        }
        let [Some(before), Some(after)] = self.neighbors_of(cell, axis) else {
            return None;
        };
        match (self.slot(before), self.slot(after)) {
            (Slot::Peg, Slot::Empty) => Some(Heading::forward(axis)),
            (Slot::Empty, Slot::Peg) => Some(Heading::backward(axis)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn legal_jumps(&self, cell: Cell) -> LegalJumps {
        self.legal[cell.as_index()]
    }

    /// Whether a jump can be issued at `cell`
    #[inline]
    #[must_use]
    pub fn is_clickable(&self, cell: Cell) -> bool {
        !self.legal_jumps(cell).is_empty()
    }

    /// False once the game is stuck.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.legal.iter().any(|j| !j.is_empty())
    }

    /// Every currently legal `(cell, axis)` pair in row-major order,
    /// horizontal before vertical.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Cell, Axis)> {
        Cell::all()
            .flat_map(|cell| {
                let jumps = self.legal_jumps(cell);
                Axis::ALL
                    .into_iter()
                    .filter(move |&axis| jumps.get(axis).is_some())
                    .map(move |axis| (cell, axis))
            })
            .collect()
    }
}
