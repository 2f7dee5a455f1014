//! The conversation log and its JSON file store.

use natter_core::{Mood, Turn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// In-memory conversation log, oldest turn first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    #[must_use]
    pub const fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Tally the log by recorded mood.
    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        let mut stats = HistoryStats {
            turns: self.turns.len(),
            ..HistoryStats::default()
        };
        for turn in &self.turns {
            match turn.mood {
                Mood::Negative => stats.negative += 1,
                Mood::Neutral => stats.neutral += 1,
                Mood::Positive => stats.positive += 1,
            }
        }
        stats
    }
}

/// Summary counts over a conversation log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub turns: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
}

/// Why a history file could not be read.
#[derive(Debug, Error)]
pub enum HistoryLoadError {
    #[error("no history file at {0}")]
    NotFound(PathBuf),
    #[error("could not read history file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("history file at {path} is not a valid turn list: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a history file could not be written.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not serialize conversation history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write history file at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable storage for a conversation log: one JSON array of turns.
///
/// Loading is forgiving, saving is not. A missing or corrupt file just
/// means a fresh conversation, but failing to persist a turn would lose
/// what the user said, so [`HistoryStore::save`] surfaces its errors.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the log, starting fresh if the file is missing or unusable.
    #[must_use]
    pub fn load(&self) -> ConversationHistory {
        match self.try_load() {
            Ok(history) => {
                debug!(
                    "Loaded {} turns from {}",
                    history.len(),
                    self.path.display()
                );
                history
            }
            Err(HistoryLoadError::NotFound(_)) => {
                debug!("No history file at {}; starting fresh", self.path.display());
                ConversationHistory::new()
            }
            Err(e) => {
                warn!("Ignoring history file: {e}; starting fresh");
                ConversationHistory::new()
            }
        }
    }

    /// Load the log, keeping the failure cases distinct.
    pub fn try_load(&self) -> Result<ConversationHistory, HistoryLoadError> {
        if !self.path.exists() {
            return Err(HistoryLoadError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|source| HistoryLoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let turns: Vec<Turn> =
            serde_json::from_str(&content).map_err(|source| HistoryLoadError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Ok(ConversationHistory::from_turns(turns))
    }

    /// Write the whole log back out as pretty-printed JSON.
    pub fn save(&self, history: &ConversationHistory) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(history.turns())?;
        fs::write(&self.path, json).map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
