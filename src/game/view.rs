//! Render-ready snapshot of a game.

use serde::Serialize;

use super::{Game, Selection};
use crate::board::{Cell, Slot, BOARD_SIZE};

/// One grid position as the front end draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub id: String,
    /// CSS class: `nothing`, `stone`, `noStone` or `selector`
    pub class: &'static str,
    pub clickable: bool,
    pub arrows: String,
}

/// A direction button shown while a selection is pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// Action value sent back, `Horizontal` or `Vertical`
    pub value: &'static str,
    pub glyph: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub rows: Vec<Vec<CellView>>,
    pub choice: Option<[ChoiceView; 2]>,
    pub history: Vec<String>,
    pub move_count: usize,
    pub pegs_remaining: usize,
    pub stuck: bool,
}

impl GameView {
    /// Cell view by notation, for callers that do not walk the grid.
    #[must_use]
    pub fn cell(&self, id: &str) -> Option<&CellView> {
        self.rows.iter().flatten().find(|c| c.id == id)
    }
}

impl Game {
    #[must_use]
    pub fn view(&self) -> GameView {
        let board = self.board();
        let pending = self.selection();

        let cell_view = |cell: Cell| {
            let jumps = board.legal_jumps(cell);
            let class = match board.slot(cell) {
                _ if pending.selected_cell() == Some(cell) => "selector",
                Slot::Void => "nothing",
                Slot::Peg => "stone",
                Slot::Empty => "noStone",
            };
            // a pending choice locks every cell
            let locked = pending.is_pending();
            CellView {
                id: cell.to_string(),
                class,
                clickable: !locked && !jumps.is_empty(),
                arrows: if locked { String::new() } else { jumps.arrows() },
            }
        };

        let rows: Vec<Vec<CellView>> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .filter_map(|col| Cell::new(row, col))
                    .map(&cell_view)
                    .collect()
            })
            .collect();

        let choice = match pending {
            Selection::Idle => None,
            Selection::AwaitingChoice { options, .. } => Some(options.map(|c| ChoiceView {
                value: c.axis.name(),
                glyph: c.heading.to_string(),
            })),
        };

        GameView {
            rows,
            choice,
            history: self.history_strings(),
            move_count: self.move_count(),
            pegs_remaining: board.peg_count(),
            stuck: !board.has_legal_moves(),
        }
    }
}
