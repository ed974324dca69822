//! Request action parsing.
//!
//! The front end sends one string per request: a control button label, a
//! cell ID, or a history entry.

use crate::board::{Axis, Cell, JumpRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing selected, just render
    None,
    Reset,
    Choose(Axis),
    Undo,
    SaveHistory,
    LoadHistory,
    /// Replay up to and including this history entry
    GoTo(JumpRecord),
    Select(Cell),
    Unknown(String),
}

impl Action {
    #[must_use]
    pub fn parse(input: &str) -> Action {
        let trimmed = input.trim();
        match trimmed {
            "" => Action::None,
            "Reset" => Action::Reset,
            "Horizontal" => Action::Choose(Axis::Horizontal),
            "Vertical" => Action::Choose(Axis::Vertical),
            "Undo" => Action::Undo,
            "Save History" => Action::SaveHistory,
            "Load History" => Action::LoadHistory,
            _ => {
                if trimmed.ends_with(['H', 'V']) {
                    if let Ok(record) = trimmed.parse::<JumpRecord>() {
                        return Action::GoTo(record);
                    }
                }
                match trimmed.parse::<Cell>() {
                    Ok(cell) => Action::Select(cell),
                    Err(_) => Action::Unknown(trimmed.to_string()),
                }
            }
        }
    }

    /// Whether performing this action reads or writes the history store.
    #[must_use]
    pub fn uses_store(&self) -> bool {
        matches!(self, Action::SaveHistory | Action::LoadHistory)
    }
}
