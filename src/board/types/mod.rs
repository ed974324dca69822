//! Core board types.
//!
//! - `Cell` - grid coordinate with `A1`..`G7` notation
//! - `Axis` and `Heading` - jump orientation and travel direction
//! - `JumpRecord` - one entry of the move history

mod axis;
mod cell;
mod record;

pub use axis::{Axis, Heading};
pub use cell::{Cell, BOARD_SIZE, CELL_COUNT};
pub use record::JumpRecord;
