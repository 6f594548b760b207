//! Storage module for persisting discovered email addresses
//!
//! This module handles:
//! - SQLite database initialization and the per-run table reset
//! - The [`EmailSink`] interface shared by all crawl workers
//! - Global uniqueness of stored addresses

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteEmailSink;
pub use traits::{EmailSink, StorageError, StorageResult};

/// A stored email address and the business it was found for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    pub shop_name: String,
    pub website: String,
    pub email: String,
}
