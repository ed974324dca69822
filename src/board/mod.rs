//! Peg board representation and jump rules.
//!
//! The board is a flat arena of 49 slots addressed by [`Cell`]. Neighbor
//! relations are computed from coordinates on demand, and the table of
//! legal jumps is rebuilt after every change.
//!
//! # Example
//! ```
//! use peg_solitaire::board::{Axis, Board, Cell};
//!
//! let mut board = Board::new();
//! let d3: Cell = "D3".parse().unwrap();
//! board.try_apply(d3, Axis::Vertical).unwrap();
//! assert_eq!(board.peg_count(), 31);
//! ```

mod error;
mod jump;
mod legality;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{CellError, JumpError, RecordParseError};
pub use legality::LegalJumps;
pub use state::{Board, Slot};
pub use types::{Axis, Cell, Heading, JumpRecord, BOARD_SIZE, CELL_COUNT};
