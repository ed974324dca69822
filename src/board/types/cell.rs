//! Cell coordinates and identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use crate::board::error::CellError;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 7;

/// Number of grid positions, playable or not.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMN_LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// A position on the 7x7 grid, stored as (row, column).
///
/// Row 0 is the top row (`1` in notation) and column 0 is `A`, so `D4` is
/// `(3, 3)`. Values are always inside the grid; corner positions exist as
/// cells but are not playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cell(u8, u8);

impl Cell {
    /// The center of the cross, the only cell that starts empty.
    pub const CENTER: Cell = Cell(3, 3);

    /// Create a cell with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Cell(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1 as usize
    }

    /// Row-major index into a 49-slot array
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Inverse of [`Cell::as_index`]; `None` past the last cell.
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        Cell::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Whether the cell belongs to the cross. The 2x2 blocks in each corner
    /// are permanently outside the board.
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        let row = self.row();
        let col = self.col();
        (row >= 2 && row <= 4) || (col >= 2 && col <= 4)
    }

    /// The adjacent grid position along `axis`, before (left/up) or after
    /// (right/down) this one. Playability is not checked.
    #[must_use]
    pub const fn step(self, axis: Axis, after: bool) -> Option<Self> {
        let (row, col) = (self.row(), self.col());
        match (axis, after) {
            (Axis::Horizontal, false) if col > 0 => Cell::new(row, col - 1),
            (Axis::Horizontal, true) => Cell::new(row, col + 1),
            (Axis::Vertical, false) if row > 0 => Cell::new(row - 1, col),
            (Axis::Vertical, true) => Cell::new(row + 1, col),
            _ => None,
        }
    }

    /// Every grid position in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col()], self.row() + 1)
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = CellError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Cell::new(row, col).ok_or(CellError::OutOfBounds { row, col })
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CellError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match letter {
            'A'..='G' => letter as usize - 'A' as usize,
            _ => return Err(invalid()),
        };
        let row = match digit {
            '1'..='7' => digit as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Cell::new(row, col).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Cell {
    type Error = CellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}
