//! Durable storage for move history.
//!
//! History is stored as a JSON array of record strings, e.g.
//! `["(1) D3V","(2) C3H"]`. Stores only move bytes around; validating that
//! the moves replay is the game's job.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use parking_lot::Mutex;

use super::error::HistoryError;
use crate::board::JumpRecord;

/// Default file name of the history file
pub const DEFAULT_HISTORY_FILE: &str = "history.solitaire";

/// Where `Save History` writes to and `Load History` reads from.
pub trait HistoryStore: Send + Sync {
    fn save(&self, history: &[JumpRecord]) -> Result<(), HistoryError>;

    fn load(&self) -> Result<Vec<JumpRecord>, HistoryError>;
}

/// Serialize records to the on-disk JSON form.
pub fn encode_history(history: &[JumpRecord]) -> Result<String, HistoryError> {
    Ok(serde_json::to_string(history)?)
}

/// Parse the on-disk JSON form, reporting the first bad entry by position.
pub fn decode_history(text: &str) -> Result<Vec<JumpRecord>, HistoryError> {
    let entries: Vec<String> = serde_json::from_str(text)?;
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            entry
                .parse::<JumpRecord>()
                .map_err(|error| HistoryError::Record { position, error })
        })
        .collect()
}

/// History kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn save(&self, history: &[JumpRecord]) -> Result<(), HistoryError> {
        let text = encode_history(history)?;
        fs::write(&self.path, text)?;
        debug!("wrote {} moves to {}", history.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<JumpRecord>, HistoryError> {
        let text = fs::read_to_string(&self.path)?;
        let history = decode_history(&text)?;
        debug!("read {} moves from {}", history.len(), self.path.display());
        Ok(history)
    }
}

/// History kept in memory, in the same JSON form as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with raw contents, valid or not.
    #[must_use]
    pub fn with_contents(text: impl Into<String>) -> Self {
        MemoryStore {
            contents: Mutex::new(Some(text.into())),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn save(&self, history: &[JumpRecord]) -> Result<(), HistoryError> {
        let text = encode_history(history)?;
        *self.contents.lock() = Some(text);
        Ok(())
    }

    fn load(&self) -> Result<Vec<JumpRecord>, HistoryError> {
        match self.contents.lock().as_deref() {
            Some(text) => decode_history(text),
            None => Err(HistoryError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no history saved",
            ))),
        }
    }
}
