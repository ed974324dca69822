//! Error types for board operations.

use std::fmt;

use super::{Axis, Cell};

/// Error type for cell notation and coordinate failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Not a column letter `A`-`G` followed by a row digit `1`-`7`
    InvalidNotation { notation: String },
    /// Coordinates outside the 7x7 grid
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}'")
            }
            CellError::OutOfBounds { row, col } => {
                write!(f, "Cell ({row}, {col}) is outside the 7x7 grid")
            }
        }
    }
}

impl std::error::Error for CellError {}

/// Error type for move record parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    /// Not of the form `(<n>) <cell><H|V>`
    Malformed { record: String },
    /// Index is not a positive integer
    BadIndex { index: String },
    /// Unknown axis letter
    BadAxis { axis: char },
    /// Cell part does not parse
    BadCell(CellError),
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordParseError::Malformed { record } => {
                write!(f, "Malformed move record '{record}'")
            }
            RecordParseError::BadIndex { index } => {
                write!(f, "Invalid move index '{index}'")
            }
            RecordParseError::BadAxis { axis } => {
                write!(f, "Invalid jump axis '{axis}', expected 'H' or 'V'")
            }
            RecordParseError::BadCell(e) => write!(f, "Invalid move record cell: {e}"),
        }
    }
}

impl std::error::Error for RecordParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordParseError::BadCell(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CellError> for RecordParseError {
    fn from(e: CellError) -> Self {
        RecordParseError::BadCell(e)
    }
}

/// Error type for jump execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpError {
    /// The cell has no legal jump along the axis
    NoLegalJump { cell: Cell, axis: Axis },
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpError::NoLegalJump { cell, axis } => {
                write!(f, "No legal {} jump at {cell}", axis.name().to_lowercase())
            }
        }
    }
}

impl std::error::Error for JumpError {}
