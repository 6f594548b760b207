//! Crawler module for site fetching and email discovery
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-request deadlines
//! - HTML parsing for links and mailto recipients
//! - The per-site breadth-first frontier
//! - The worker pool that crawls many sites at once

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod site;

pub use coordinator::{run_scrape, Coordinator, RunSummary};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use frontier::{CrawlFrontier, SEED_PATHS};
pub use parser::{parse_html, ParsedPage};
pub use site::SiteCrawler;
