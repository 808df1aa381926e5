//! Calculation history and its persistence.
//!
//! The history is an append-only list of `{expression, result}` entries.
//! It is written to an injected [`HistoryStore`] as a whole-list JSON
//! snapshot after every mutation and read back once at startup.
//!
//! Persistence is best effort: a missing, unreadable or malformed snapshot
//! loads as an empty history, and failed writes are reported to the caller
//! who decides whether to care.

mod entry;
mod error;
mod store;

pub use entry::{History, HistoryEntry};
pub use error::{HistoryError, PersistError, StoreError};
pub use store::{FileStore, HistoryStore, MemoryStore};

use tracing::{info, warn};

/// Key the history snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "equations";

/// Load the history stored under `key`.
///
/// Never fails: absence, read errors and malformed snapshots all yield an
/// empty history, the latter two with a warning.
///
/// # Example
///
/// ```rust
/// use calcpad::history::{load, MemoryStore};
///
/// let store = MemoryStore::with_value("equations", "not json");
/// assert!(load(&store, "equations").is_empty());
/// ```
pub fn load<S: HistoryStore + ?Sized>(store: &S, key: &str) -> History {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read stored history");
            return History::new();
        }
    };

    match History::from_json(&raw) {
        Ok(history) => {
            info!(key, entries = history.len(), "loaded stored history");
            history
        }
        Err(e) => {
            warn!(key, error = %e, "discarding malformed stored history");
            History::new()
        }
    }
}

/// Write the full history snapshot under `key`.
pub fn save<S: HistoryStore + ?Sized>(
    store: &mut S,
    key: &str,
    history: &History,
) -> Result<(), PersistError> {
    let json = history.to_json()?;
    store.set(key, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl HistoryStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    #[test]
    fn load_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load(&store, DEFAULT_STORAGE_KEY).is_empty());
    }

    #[test]
    fn load_malformed_snapshot_is_empty() {
        let store = MemoryStore::with_value(DEFAULT_STORAGE_KEY, "[{\"expression\":");
        assert!(load(&store, DEFAULT_STORAGE_KEY).is_empty());
    }

    #[test]
    fn load_read_failure_is_empty() {
        assert!(load(&BrokenStore, DEFAULT_STORAGE_KEY).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let history = History::new().record(HistoryEntry::new("5+3", "8"));

        save(&mut store, DEFAULT_STORAGE_KEY, &history).unwrap();
        let loaded = load(&store, DEFAULT_STORAGE_KEY);

        assert_eq!(loaded, history);
    }

    #[test]
    fn save_reports_store_failure() {
        let result = save(&mut BrokenStore, DEFAULT_STORAGE_KEY, &History::new());
        assert!(matches!(result, Err(PersistError::Store(_))));
    }

    #[test]
    fn keys_are_independent() {
        let mut store = MemoryStore::new();
        let history = History::new().record(HistoryEntry::new("1+1", "2"));

        save(&mut store, "session-a", &history).unwrap();

        assert_eq!(load(&store, "session-a").len(), 1);
        assert!(load(&store, "session-b").is_empty());
    }
}
