//! Site crawler
//!
//! Runs the bounded breadth-first crawl of a single website. Each URL moves
//! through `queued → fetching → {extracted | skipped}`:
//!
//! - a page that answers is scanned for emails and links (extracted)
//! - any failed fetch, timeout or transport error, gets exactly one retry
//!   with the longer deadline, and the URL is abandoned if that also fails
//!   (skipped)
//!
//! Abandoned URLs do not count against the page budget, and never end the
//! crawl of the rest of the site. Malformed markup is not a failure: text
//! extraction always runs and the tolerant HTML parser recovers what links
//! it can.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::frontier::CrawlFrontier;
use crate::crawler::parser::parse_html;
use crate::email::extract_from_text;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;

/// Crawls one site at a time for contact emails
///
/// A `SiteCrawler` holds no per-site state; every call to
/// [`crawl_site`](Self::crawl_site) builds its own [`CrawlFrontier`], so one
/// crawler can be shared by all workers.
#[derive(Debug, Clone)]
pub struct SiteCrawler {
    client: Client,
    fetch_timeout: Duration,
    retry_timeout: Duration,
    page_budget: u32,
}

impl SiteCrawler {
    /// Creates a crawler using the deadlines and page budget from `config`
    pub fn new(client: Client, config: &CrawlerConfig) -> Self {
        Self {
            client,
            fetch_timeout: config.fetch_timeout(),
            retry_timeout: config.retry_timeout(),
            page_budget: config.max_pages_per_site,
        }
    }

    /// Crawls a site and returns every distinct email found on it
    ///
    /// The crawl starts from the origin, `/contact` and `/contact-us`, then
    /// follows same-domain links breadth-first until the frontier is empty or
    /// the page budget is spent. An unreachable site simply yields no emails.
    ///
    /// # Arguments
    ///
    /// * `origin` - The site's root origin (`scheme://host[:port]`)
    ///
    /// # Returns
    ///
    /// Emails in the order they were first found
    pub async fn crawl_site(&self, origin: &str) -> Vec<String> {
        let mut frontier = CrawlFrontier::seeded(origin, self.page_budget);
        let mut found = SiteEmails::default();

        while let Some(url) = frontier.next_url() {
            tracing::debug!("Fetching {}", url);

            let body = match self.fetch_with_retry(&url).await {
                Some(body) => body,
                None => {
                    tracing::info!("⏩ Skipping slow/unresponsive page: {}", url);
                    continue;
                }
            };

            frontier.record_fetched();
            found.extend(extract_from_text(&body));

            let parsed = parse_html(&body, origin);
            found.extend(parsed.mailto_emails);
            for link in parsed.links {
                frontier.enqueue(link);
            }
        }

        tracing::debug!(
            "Finished {}: {} pages fetched, {} emails, {} URLs left in frontier",
            origin,
            frontier.pages_fetched(),
            found.len(),
            frontier.queued()
        );

        found.into_vec()
    }

    /// Fetches a page, retrying once with the longer deadline after any failure
    async fn fetch_with_retry(&self, url: &str) -> Option<String> {
        match fetch_page(&self.client, url, self.fetch_timeout).await {
            FetchOutcome::Page(body) => Some(body),
            FetchOutcome::TimedOut | FetchOutcome::Transport(_) => {
                tracing::debug!("Retrying {} with {:?} deadline", url, self.retry_timeout);
                fetch_page(&self.client, url, self.retry_timeout)
                    .await
                    .into_page()
            }
        }
    }
}

/// Emails found on one site, deduplicated in first-seen order
#[derive(Debug, Default)]
struct SiteEmails {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl SiteEmails {
    fn extend(&mut self, emails: impl IntoIterator<Item = String>) {
        for email in emails {
            if !email.is_empty() && self.seen.insert(email.clone()) {
                self.ordered.push(email);
            }
        }
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
