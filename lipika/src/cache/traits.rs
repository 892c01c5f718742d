//! Durable storage interface for the suggestion cache.
//!
//! The cache keeps its working set in memory and mirrors it to a
//! [`SuggestionStorage`] backend as one JSON document under a fixed key.
//! Backends are synchronous: the cache writes through on every insert.

use thiserror::Error;

/// Errors that can occur while reading or writing durable storage.
///
/// The cache logs and discards these; durability is best-effort.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The mapping could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure (quota, unavailable, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed durable blob store.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`; the cache calls them while
/// holding its own lock, so implementations need no ordering guarantees of
/// their own.
pub trait SuggestionStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
