use once_cell::sync::Lazy;
use serde::Serialize;

use super::legality::LegalJumps;
use super::{Axis, Cell, CELL_COUNT};

/// Contents of one grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    /// Corner position outside the cross; never changes
    Void,
    Empty,
    Peg,
}

/// Starting contents of every grid position: the cross full of pegs with
/// the center hole open.
static START_LAYOUT: Lazy<[Slot; CELL_COUNT]> = Lazy::new(|| {
    let mut slots = [Slot::Void; CELL_COUNT];
    for cell in Cell::all().filter(|c| c.is_playable()) {
        slots[cell.as_index()] = Slot::Peg;
    }
    slots[Cell::CENTER.as_index()] = Slot::Empty;
    slots
});

static PLAYABLE_CELLS: Lazy<Vec<Cell>> =
    Lazy::new(|| Cell::all().filter(|c| c.is_playable()).collect());

/// The peg board: a flat arena of 49 slots addressed by [`Cell`], plus the
/// derived legal-jump table for every slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) slots: [Slot; CELL_COUNT],
    pub(crate) legal: [LegalJumps; CELL_COUNT],
}

impl Board {
    /// Fresh starting position with legal jumps already computed.
    pub fn new() -> Self {
        let mut board = Board {
            slots: *START_LAYOUT,
            legal: [LegalJumps::NONE; CELL_COUNT],
        };
        board.refresh_legal_moves();
        board
    }

    #[inline]
    #[must_use]
    pub fn slot(&self, cell: Cell) -> Slot {
        self.slots[cell.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.slot(cell) == Slot::Peg
    }

    /// Number of pegs left on the board
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s == Slot::Peg).count()
    }

    /// The 33 cells of the cross in row-major order
    #[must_use]
    pub fn playable_cells() -> &'static [Cell] {
        &PLAYABLE_CELLS
    }

    /// Playable neighbors of `cell` along `axis` as `[before, after]`
    /// (left/right or up/down). Off-grid and corner positions come back as
    /// `None`, so an edge cell yields at most one neighbor.
    #[must_use]
    pub fn neighbors_of(&self, cell: Cell, axis: Axis) -> [Option<Cell>; 2] {
        let playable = |c: Option<Cell>| c.filter(|n| n.is_playable());
        [
            playable(cell.step(axis, false)),
            playable(cell.step(axis, true)),
        ]
    }

    /// Flip a playable slot between peg and hole.
    pub(crate) fn toggle(&mut self, cell: Cell) {
        let slot = &mut self.slots[cell.as_index()];
        *slot = match *slot {
            Slot::Peg => Slot::Empty,
            Slot::Empty => Slot::Peg,
            Slot::Void => Slot::Void,
        };
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
