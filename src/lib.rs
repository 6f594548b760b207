//! Contact-Scraper: finds contact email addresses on business websites
//!
//! This crate pulls candidate businesses from an Overpass listing query, crawls
//! a shallow, same-domain slice of each website, and stores every distinct
//! email address it finds in a SQLite table.

pub mod config;
pub mod crawler;
pub mod email;
pub mod source;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Contact-Scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Listing query to {endpoint} failed: {source}")]
    DataSource {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Contact-Scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_scrape, Coordinator, RunSummary, SiteCrawler};
pub use source::CandidateSite;
pub use storage::{EmailSink, SqliteEmailSink};
pub use url::{domain_of, normalize_to_root, resolve_link};
