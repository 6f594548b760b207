//! Crawl coordinator - worker pool and run orchestration
//!
//! This module contains the top-level run logic, including:
//! - Opening the email sink and querying the listing source
//! - Deduplicating candidates by domain
//! - Fanning candidates out to a fixed pool of site workers
//! - Routing discovered emails to the sink
//! - Reporting a summary once every worker has drained the queue

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::site::SiteCrawler;
use crate::source::{dedup_by_domain, CandidateSite, OverpassClient};
use crate::storage::{EmailSink, SqliteEmailSink};
use crate::ScraperError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

type WorkQueue = Arc<Mutex<mpsc::UnboundedReceiver<CandidateSite>>>;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidates handed to the worker pool
    pub candidates: usize,

    /// Sites a worker actually crawled
    pub sites_crawled: usize,

    /// Crawled sites that produced no email (unreachable or none published)
    pub sites_without_emails: usize,

    /// Emails found across all sites, before global dedup
    pub emails_found: usize,

    /// Emails newly written to the sink
    pub emails_stored: usize,
}

impl RunSummary {
    fn merge(&mut self, other: RunSummary) {
        self.sites_crawled += other.sites_crawled;
        self.sites_without_emails += other.sites_without_emails;
        self.emails_found += other.emails_found;
        self.emails_stored += other.emails_stored;
    }
}

/// Main coordinator structure
///
/// Owns the shared pieces of a run: one [`SiteCrawler`] (and its HTTP
/// client) and one [`EmailSink`]. Per-site state never leaves a worker.
pub struct Coordinator {
    crawler: Arc<SiteCrawler>,
    sink: Arc<dyn EmailSink>,
    workers: usize,
    request_delay: Duration,
}

impl Coordinator {
    /// Creates a coordinator with a fresh HTTP client built from `config`
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `sink` - Where discovered emails are written
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScraperError)` - Failed to build the HTTP client
    pub fn new(config: &CrawlerConfig, sink: Arc<dyn EmailSink>) -> Result<Self, ScraperError> {
        let client = build_http_client(config)?;
        let crawler = SiteCrawler::new(client, config);
        Ok(Self::with_crawler(crawler, config, sink))
    }

    /// Creates a coordinator around an existing crawler
    pub fn with_crawler(
        crawler: SiteCrawler,
        config: &CrawlerConfig,
        sink: Arc<dyn EmailSink>,
    ) -> Self {
        Self {
            crawler: Arc::new(crawler),
            sink,
            workers: config.workers.max(1) as usize,
            request_delay: config.request_delay(),
        }
    }

    /// Crawls every candidate and waits for all workers to finish
    ///
    /// Candidates are queued in order on a single unbounded channel; each
    /// worker takes the next one as soon as it is free. The call returns only
    /// after the queue is drained and every worker has exited.
    pub async fn run(&self, candidates: Vec<CandidateSite>) -> RunSummary {
        let mut summary = RunSummary {
            candidates: candidates.len(),
            ..RunSummary::default()
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let queue: WorkQueue = Arc::new(Mutex::new(rx));

        let handles: Vec<_> = (0..self.workers)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    Arc::clone(&queue),
                    Arc::clone(&self.crawler),
                    Arc::clone(&self.sink),
                    self.request_delay,
                ))
            })
            .collect();

        for candidate in candidates {
            if tx.send(candidate).is_err() {
                tracing::error!("All workers exited before the queue was filled");
                break;
            }
        }
        drop(tx);

        for handle in handles {
            match handle.await {
                Ok(worker_summary) => summary.merge(worker_summary),
                Err(e) => tracing::error!("Worker task failed: {}", e),
            }
        }

        summary
    }
}

/// Pulls candidates until the queue is closed and empty
async fn run_worker(
    worker_id: usize,
    queue: WorkQueue,
    crawler: Arc<SiteCrawler>,
    sink: Arc<dyn EmailSink>,
    request_delay: Duration,
) -> RunSummary {
    let mut summary = RunSummary::default();

    loop {
        let next = { queue.lock().await.recv().await };
        let candidate = match next {
            Some(candidate) => candidate,
            None => break,
        };

        if candidate.website.is_empty() {
            continue;
        }

        tracing::debug!("Worker {} crawling {}", worker_id, candidate.website);

        let emails = crawler.crawl_site(&candidate.website).await;
        summary.sites_crawled += 1;
        if emails.is_empty() {
            summary.sites_without_emails += 1;
        }

        for email in emails.iter().filter(|e| !e.is_empty()) {
            summary.emails_found += 1;

            match sink.insert_if_absent(&candidate.name, &candidate.website, email) {
                Ok(true) => {
                    summary.emails_stored += 1;
                    tracing::info!("✔ {}  from {} ({})", email, candidate.name, candidate.website);
                }
                Ok(false) => {
                    tracing::debug!("{} already stored", email);
                }
                Err(e) => {
                    tracing::error!("DB insert error for {}: {}", email, e);
                }
            }
        }

        tokio::time::sleep(request_delay).await;
    }

    tracing::debug!("Worker {} finished", worker_id);
    summary
}

/// Runs a complete scrape
///
/// This is the main entry point. It will:
/// 1. Open the SQLite sink, discarding the previous run's emails
/// 2. Query the listing source for candidates
/// 3. Keep one candidate per domain
/// 4. Crawl every candidate on the worker pool
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - Scrape completed
/// * `Err(ScraperError)` - The sink could not be opened or the listing query failed
///
/// # Example
///
/// ```no_run
/// use contact_scraper::config::Config;
/// use contact_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_scrape(Config::default()).await?;
/// println!("{} emails stored", summary.emails_stored);
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<RunSummary, ScraperError> {
    let sink = SqliteEmailSink::create(Path::new(&config.output.database_path))?;
    let sink: Arc<dyn EmailSink> = Arc::new(sink);

    let source = OverpassClient::new(&config.source, &config.crawler.user_agent)?;
    let candidates = source.fetch_candidates().await?;
    tracing::info!("Fetched shops from listing: {}", candidates.len());

    let candidates = dedup_by_domain(candidates);
    tracing::info!("Unique shops to scrape: {}", candidates.len());

    let coordinator = Coordinator::new(&config.crawler, sink)?;
    let summary = coordinator.run(candidates).await;

    tracing::info!("Scraping finished.");
    Ok(summary)
}
