//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler:
//! - Building the shared HTTP client
//! - Single GET requests with a hard per-request deadline
//! - Classifying failures as timeouts or transport errors

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a single fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// The full response body, whatever the status code
    Page(String),

    /// The deadline passed before the body was read
    TimedOut,

    /// Any other failure (DNS, connect, TLS, body decoding)
    Transport(String),
}

impl FetchOutcome {
    /// Collapses the outcome to "page available or not"
    pub fn into_page(self) -> Option<String> {
        match self {
            Self::Page(body) => Some(body),
            Self::TimedOut | Self::Transport(_) => None,
        }
    }
}

/// Builds the HTTP client shared by every crawl worker
///
/// The client-wide timeout is a ceiling above the per-request deadlines the
/// site crawler passes to [`fetch_page`].
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.client_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a hard deadline
///
/// The deadline covers connecting, receiving headers and reading the body.
/// Non-2xx responses still count as pages: error pages often carry the same
/// footer with contact details.
///
/// # Failure Handling
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | Deadline exceeded | `TimedOut` |
/// | Connect / DNS / TLS error | `Transport` |
/// | Body read failure | `Transport` |
///
/// Every failure is logged; the caller decides whether to retry.
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(url, e),
    };

    match response.text().await {
        Ok(body) => FetchOutcome::Page(body),
        Err(e) => classify_error(url, e),
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchOutcome {
    if error.is_timeout() {
        tracing::debug!("Timed out fetching {}", url);
        FetchOutcome::TimedOut
    } else {
        tracing::warn!("HTTP error visiting {}: {}", url, error);
        FetchOutcome::Transport(error.to_string())
    }
}
