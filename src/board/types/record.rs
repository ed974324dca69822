//! Move records, the unit of game history.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use super::cell::Cell;
use crate::board::error::RecordParseError;

/// One played jump: its 1-based position in the game, the cell the jump
/// was issued at, and the axis it ran along.
///
/// Text form is `(<index>) <cell><H|V>`, for example `(1) D3V`. The history
/// file stores a JSON array of these strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JumpRecord {
    pub index: u32,
    pub cell: Cell,
    pub axis: Axis,
}

impl JumpRecord {
    #[must_use]
    pub const fn new(index: u32, cell: Cell, axis: Axis) -> Self {
        JumpRecord { index, cell, axis }
    }
}

impl fmt::Display for JumpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}{}", self.index, self.cell, self.axis)
    }
}

impl FromStr for JumpRecord {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RecordParseError::Malformed {
            record: s.to_string(),
        };

        let rest = s.strip_prefix('(').ok_or_else(malformed)?;
        let (index_str, rest) = rest.split_once(") ").ok_or_else(malformed)?;
        let index = index_str
            .parse::<u32>()
            .ok()
            .filter(|&i| i > 0)
            .ok_or_else(|| RecordParseError::BadIndex {
                index: index_str.to_string(),
            })?;

        let axis_char = rest.chars().last().ok_or_else(malformed)?;
        let axis = Axis::from_letter(axis_char).ok_or(RecordParseError::BadAxis { axis: axis_char })?;
        let cell_str = &rest[..rest.len() - axis_char.len_utf8()];
        let cell = cell_str.parse::<Cell>()?;

        Ok(JumpRecord { index, cell, axis })
    }
}

impl TryFrom<String> for JumpRecord {
    type Error = RecordParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JumpRecord> for String {
    fn from(record: JumpRecord) -> Self {
        record.to_string()
    }
}
