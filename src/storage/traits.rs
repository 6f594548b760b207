//! Storage traits and error types
//!
//! This module defines the sink interface the crawl workers write through and
//! the errors a sink can report.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Append-only sink for discovered email addresses
///
/// Implementations are shared by every crawl worker, so they must serialize
/// concurrent writes themselves. An address that is already stored is not an
/// error: `insert_if_absent` returns `Ok(false)` and leaves the first record
/// untouched.
pub trait EmailSink: Send + Sync {
    /// Stores the address unless it is already present
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A new record was written
    /// * `Ok(false)` - The address was already stored
    /// * `Err(StorageError)` - The write failed
    fn insert_if_absent(&self, shop_name: &str, website: &str, email: &str)
        -> StorageResult<bool>;
}
