//! History and storage error types.

use thiserror::Error;

/// Errors raised by a [`HistoryStore`](super::HistoryStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file or device operation failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Backend cannot serve requests right now
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while encoding or decoding a history snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Stored snapshot is not a valid history list
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

/// Failure to write a history snapshot to its store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Encode(#[from] HistoryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
