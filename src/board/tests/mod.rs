//! Board module tests.
//!
//! - `initial.rs` - starting layout and neighbor topology
//! - `jumps.rs` - jump legality and execution
//! - `proptest.rs` - property-based tests over random play


use crate::board::Cell;

pub(super) fn cell(notation: &str) -> Cell {
    notation.parse().expect("valid cell notation")
}
