//! Contact-Scraper main entry point
//!
//! This is the command-line interface for the Contact-Scraper email collector.

use anyhow::Context;
use clap::Parser;
use contact_scraper::config::{load_or_default, Config};
use contact_scraper::crawler::{run_scrape, RunSummary};
use contact_scraper::storage::SqliteEmailSink;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Contact-Scraper: collects contact emails from business websites
///
/// Contact-Scraper asks an Overpass endpoint for businesses with a website,
/// crawls a handful of same-domain pages on each site, and stores every
/// distinct email address it finds in a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "contact-scraper")]
#[command(version)]
#[command(about = "Collects contact emails from business websites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the settings without scraping
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show the emails stored by the previous run and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_or_default(Some(path))
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            load_or_default(None).context("default configuration is invalid")?
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_scrape(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_scraper=info,warn"),
            1 => EnvFilter::new("contact_scraper=debug,info"),
            2 => EnvFilter::new("contact_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: prints the effective settings
fn handle_dry_run(config: &Config) {
    println!("=== Contact-Scraper Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Workers: {}", config.crawler.workers);
    println!("  Delay between sites: {}ms", config.crawler.request_delay_ms);
    println!("  Pages per site: {}", config.crawler.max_pages_per_site);
    println!("  Fetch timeout: {}ms", config.crawler.fetch_timeout_ms);
    println!("  Retry timeout: {}ms", config.crawler.retry_timeout_ms);
    println!("  Client timeout: {}ms", config.crawler.client_timeout_ms);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nSource:");
    println!("  Endpoint: {}", config.source.endpoint);
    println!("  Timeout: {}ms", config.source.timeout_ms);
    println!("  Query:");
    for line in config.source.query.lines() {
        println!("    {}", line);
    }

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: lists what the previous run stored
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.output.database_path);

    let sink = SqliteEmailSink::open_existing(Path::new(&config.output.database_path))
        .with_context(|| format!("failed to open {}", config.output.database_path))?;

    let records = sink.list_emails()?;
    for record in &records {
        println!("{}  {} ({})", record.email, record.shop_name, record.website);
    }

    println!("\nTotal emails: {}", sink.count_emails()?);

    Ok(())
}

/// Handles the main scrape
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting scrape with {} workers, {} pages per site",
        config.crawler.workers,
        config.crawler.max_pages_per_site
    );

    match run_scrape(config).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\n=== Scrape Summary ===");
    println!("  Candidates: {}", summary.candidates);
    println!("  Sites crawled: {}", summary.sites_crawled);
    println!("  Sites without emails: {}", summary.sites_without_emails);
    println!("  Emails found: {}", summary.emails_found);
    println!("  New emails stored: {}", summary.emails_stored);
}
