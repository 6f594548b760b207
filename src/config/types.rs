use serde::Deserialize;
use std::time::Duration;

/// Overpass QL query for cafés and coffee shops across Great Britain
pub const DEFAULT_QUERY: &str = r#"[out:json][timeout:300];
area["ISO3166-1"="GB"]->.uk;
(
  node["amenity"="cafe"](area.uk);
  node["shop"="coffee"](area.uk);
);
out;"#;

/// Main configuration structure for Contact-Scraper
///
/// Every section is optional in the TOML file; missing keys fall back to the
/// defaults documented on each field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Number of concurrent site workers (default 5)
    pub workers: u32,

    /// Pause each worker takes after finishing a site, in milliseconds (default 500)
    pub request_delay_ms: u64,

    /// Deadline for the first attempt at a page, in milliseconds (default 10s)
    pub fetch_timeout_ms: u64,

    /// Deadline for the single retry of a page, in milliseconds (default 15s)
    pub retry_timeout_ms: u64,

    /// Whole-client ceiling applied to every crawl request, in milliseconds (default 20s)
    pub client_timeout_ms: u64,

    /// Page budget per site (default 10)
    pub max_pages_per_site: u32,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            request_delay_ms: 500,
            fetch_timeout_ms: 10_000,
            retry_timeout_ms: 15_000,
            client_timeout_ms: 20_000,
            max_pages_per_site: 10,
            user_agent: format!("contact-scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CrawlerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn retry_timeout(&self) -> Duration {
        Duration::from_millis(self.retry_timeout_ms)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_millis(self.client_timeout_ms)
    }
}

/// Listing source configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SourceConfig {
    /// Overpass interpreter endpoint
    pub endpoint: String,

    /// Overpass QL query sent as the `data` form field
    pub query: String,

    /// Deadline for the listing query, in milliseconds (default 330s)
    ///
    /// Kept separate from the crawl deadlines: the default query asks the
    /// server for up to 300 seconds of work.
    pub timeout_ms: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://overpass-api.de/api/interpreter".to_string(),
            query: DEFAULT_QUERY.to_string(),
            timeout_ms: 330_000,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path to the SQLite database file
    pub database_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: "./emails.db".to_string(),
        }
    }
}
