//! Calculation history tracking.
//!
//! Recording takes the history by value and hands it back with the entry
//! appended, so updates read as `history = history.record(entry)` and the
//! log is never copied.

use super::error::HistoryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use calcpad::history::HistoryEntry;
///
/// let entry = HistoryEntry::new("5+3", "8");
/// assert_eq!(entry.expression, "5+3");
/// assert_eq!(entry.result, "8");
/// assert!(entry.recorded_at.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression as displayed when equals was pressed
    pub expression: String,
    /// Rounded, formatted result
    pub result: String,
    /// When the calculation happened; absent in snapshots written without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            recorded_at: Some(Utc::now()),
        }
    }
}

/// Ordered log of calculations, oldest first.
///
/// # Example
///
/// ```rust
/// use calcpad::history::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::new("5+3", "8"));
/// let history = history.record(HistoryEntry::new("8×2", "16"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.last().map(|e| e.result.as_str()), Some("16"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn record(mut self, entry: HistoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append an entry and keep only the newest `limit` entries.
    pub fn record_bounded(self, entry: HistoryEntry, limit: Option<usize>) -> Self {
        let history = self.record(entry);
        match limit {
            Some(limit) => history.newest(limit),
            None => history,
        }
    }

    /// History holding only the newest `limit` entries.
    pub fn newest(mut self, limit: usize) -> Self {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.drain(..skip);
        self
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as a JSON array of entries.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(|e| HistoryError::SerializationFailed(e.to_string()))
    }

    /// Decode from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        serde_json::from_str(json).map_err(|e| HistoryError::DeserializationFailed(e.to_string()))
    }
}

impl From<Vec<HistoryEntry>> for History {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}
