//! Error types for game-level operations.

use std::fmt;
use std::io;

use crate::board::{JumpError, JumpRecord, RecordParseError};

/// Error type for saving, loading and replaying move history
#[derive(Debug)]
pub enum HistoryError {
    /// Reading or writing the history file failed
    Io(io::Error),
    /// History is not a JSON array of strings
    Json(serde_json::Error),
    /// An entry of the array is not a move record
    Record { position: usize, error: RecordParseError },
    /// Record indices do not run 1, 2, 3, ...
    OutOfSequence { expected: u32, found: u32 },
    /// A record names a jump that is not legal at that point of the game
    IllegalJump { record: JumpRecord, error: JumpError },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "History file error: {e}"),
            HistoryError::Json(e) => write!(f, "History is not a list of moves: {e}"),
            HistoryError::Record { position, error } => {
                write!(f, "History entry {position}: {error}")
            }
            HistoryError::OutOfSequence { expected, found } => {
                write!(f, "History out of sequence: expected move {expected}, found {found}")
            }
            HistoryError::IllegalJump { record, error } => {
                write!(f, "History move '{record}' cannot be replayed: {error}")
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Io(e) => Some(e),
            HistoryError::Json(e) => Some(e),
            HistoryError::Record { error, .. } => Some(error),
            HistoryError::IllegalJump { error, .. } => Some(error),
            HistoryError::OutOfSequence { .. } => None,
        }
    }
}

impl From<io::Error> for HistoryError {
    fn from(e: io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Json(e)
    }
}

/// Error type for actions performed on a [`Game`](super::Game)
#[derive(Debug)]
pub enum GameError {
    /// A jump was requested that the board does not allow
    Jump(JumpError),
    /// History could not be saved, loaded or replayed
    History(HistoryError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Jump(e) => write!(f, "{e}"),
            GameError::History(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Jump(e) => Some(e),
            GameError::History(e) => Some(e),
        }
    }
}

impl From<JumpError> for GameError {
    fn from(e: JumpError) -> Self {
        GameError::Jump(e)
    }
}

impl From<HistoryError> for GameError {
    fn from(e: HistoryError) -> Self {
        GameError::History(e)
    }
}
