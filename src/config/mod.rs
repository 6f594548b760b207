//! Configuration module for Contact-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Running without a file is valid: every setting has a default.
//!
//! # Example
//!
//! ```no_run
//! use contact_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Workers: {}", config.crawler.workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SourceConfig, DEFAULT_QUERY};

// Re-export parser functions
pub use parser::{load_config, load_or_default};
pub use validation::validate;
