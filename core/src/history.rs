//! Session history
//!
//! Started sessions are remembered so their durations can be re-selected
//! later. The list lives in a JSON file under the platform data directory,
//! newest first, capped at the most recent fifty entries. Loading never
//! fails hard: losing the list is acceptable, refusing to start the timer
//! over it is not.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, LocalResult, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{format_clock, rounded_minutes};

/// Maximum number of entries kept.
pub const HISTORY_CAP: usize = 50;

/// Errors while persisting history. Loading is infallible by design; see
/// [`SessionHistory::load`].
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to write history file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create history directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode history")]
    Encode(#[from] serde_json::Error),
}

/// One started session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonically increasing id, unique within one history file
    pub id: u64,
    /// Selected duration in seconds
    pub duration_secs: u32,
    /// Start instant as Unix epoch milliseconds
    pub started_at_ms: i64,
}

impl HistoryEntry {
    /// Duration as the clock string shown in the history list.
    pub fn duration_display(&self) -> String {
        format_clock(self.duration_secs)
    }

    /// Duration rounded to whole minutes for compact labels.
    pub fn duration_minutes(&self) -> u32 {
        rounded_minutes(self.duration_secs)
    }

    /// Start instant formatted in local time.
    pub fn started_at_display(&self) -> String {
        match Local.timestamp_millis_opt(self.started_at_ms) {
            LocalResult::Single(at) => at.format("%Y-%m-%d %H:%M").to_string(),
            _ => "-".to_string(),
        }
    }
}

/// Recent sessions, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from `path`.
    ///
    /// A missing file is a normal first run. A file that fails to parse is
    /// logged and discarded, and the next save overwrites it.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::new(),
        };
        match serde_json::from_str(&content) {
            Ok(history) => history,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "discarding unreadable history file"
                );
                Self::new()
            }
        }
    }

    /// Write the whole history to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| HistoryError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| HistoryError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Record a session start. The new entry goes in front; anything past
    /// the cap falls off the end.
    pub fn record(&mut self, duration_secs: u32, started_at_ms: i64) -> HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id(),
            duration_secs,
            started_at_ms,
        };
        self.entries.insert(0, entry.clone());
        self.entries.truncate(HISTORY_CAP);
        entry
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by id, for re-selecting a past duration.
    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ids stay unique across the life of one file: one past the largest
    /// id still present, so trimmed entries never free their ids for reuse
    /// while newer ones remain.
    fn next_id(&self) -> u64 {
        self.entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1
    }
}

/// Default history location: `<local data dir>/hengio/history.json`.
pub fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hengio")
        .join("history.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_puts_newest_first() {
        let mut history = SessionHistory::new();
        history.record(300, 1_000);
        history.record(900, 2_000);
        history.record(1500, 3_000);

        let durations: Vec<u32> = history.entries().iter().map(|e| e.duration_secs).collect();
        assert_eq!(durations, vec![1500, 900, 300]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn ids_increase_and_survive_trimming() {
        let mut history = SessionHistory::new();
        for i in 0..(HISTORY_CAP as u32 + 10) {
            history.record(60, i64::from(i));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        // The newest entry has the highest id and the oldest ids fell off.
        assert_eq!(history.entries()[0].id, HISTORY_CAP as u64 + 10);
        let min_id = history.entries().iter().map(|e| e.id).min().unwrap();
        assert_eq!(min_id, 11);

        // The next id is still above everything ever handed out.
        let entry = history.record(120, 0);
        assert_eq!(entry.id, HISTORY_CAP as u64 + 11);
    }

    #[test]
    fn get_finds_entries_by_id() {
        let mut history = SessionHistory::new();
        let first = history.record(300, 1_000);
        let second = history.record(900, 2_000);

        assert_eq!(history.get(first.id).map(|e| e.duration_secs), Some(300));
        assert_eq!(history.get(second.id).map(|e| e.duration_secs), Some(900));
        assert!(history.get(999).is_none());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut history = SessionHistory::new();
        history.record(300, 1_000);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hengio").join("history.json");

        let mut history = SessionHistory::new();
        history.record(1500, 1_700_000_000_000);
        history.record(300, 1_700_000_060_000);
        history.save(&path).unwrap();

        let loaded = SessionHistory::load(&path);
        assert_eq!(loaded.entries(), history.entries());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = SessionHistory::load(&dir.path().join("nope.json"));
        assert!(history.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let history = SessionHistory::load(&path);
        assert!(history.is_empty());
    }

    #[test]
    fn entry_display_helpers() {
        let entry = HistoryEntry {
            id: 1,
            duration_secs: 1500,
            started_at_ms: 0,
        };
        assert_eq!(entry.duration_display(), "25:00");
        assert_eq!(entry.duration_minutes(), 25);
    }
}
