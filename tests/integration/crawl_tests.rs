//! Integration tests for the scraper
//!
//! These tests use wiremock to stand in for business websites and the
//! Overpass endpoint, and exercise whole crawls end-to-end.

use contact_scraper::config::{Config, CrawlerConfig, OutputConfig, SourceConfig};
use contact_scraper::crawler::{build_http_client, run_scrape, Coordinator, SiteCrawler};
use contact_scraper::source::CandidateSite;
use contact_scraper::storage::{EmailSink, SqliteEmailSink};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Short deadlines so failing pages do not slow the suite down
fn create_test_crawler_config() -> CrawlerConfig {
    CrawlerConfig {
        workers: 2,
        request_delay_ms: 5,
        fetch_timeout_ms: 300,
        retry_timeout_ms: 500,
        client_timeout_ms: 2_000,
        max_pages_per_site: 10,
        user_agent: "TestScraper/1.0".to_string(),
    }
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>Cafe</title></head><body>{}</body></html>",
            body
        ))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_page_budget_limits_requests() {
    let mock_server = MockServer::start().await;

    let links: String = (0..1000)
        .map(|i| format!(r#"<a href="/page/{}">Page {}</a>"#, i, i))
        .collect();

    Mock::given(method("GET"))
        .respond_with(html_page(&links))
        .mount(&mock_server)
        .await;

    let config = create_test_crawler_config();
    let crawler = SiteCrawler::new(build_http_client(&config).unwrap(), &config);

    let emails = crawler.crawl_site(&mock_server.uri()).await;
    assert!(emails.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();

    assert_eq!(paths.len(), 10, "Page budget should cap the crawl at 10 fetches");
    assert_eq!(&paths[..3], &["/", "/contact", "/contact-us"]);
    let expected_pages: Vec<String> = (0..7).map(|i| format!("/page/{}", i)).collect();
    assert_eq!(&paths[3..], expected_pages.as_slice());
}

#[tokio::test]
async fn test_all_pages_timing_out_gives_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("late@cafe.test").set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = CrawlerConfig {
        fetch_timeout_ms: 50,
        retry_timeout_ms: 100,
        ..create_test_crawler_config()
    };
    let crawler = SiteCrawler::new(build_http_client(&config).unwrap(), &config);

    let started = Instant::now();
    let emails = crawler.crawl_site(&mock_server.uri()).await;

    assert!(emails.is_empty());
    // Three seeds, each tried twice, never waiting for the 500ms response
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_coordinator_stores_each_email_once() {
    let first_site = MockServer::start().await;
    let second_site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="mailto:owner@beans.test">Mail us</a> <a href="/menu">Menu</a>"#,
        ))
        .mount(&first_site)
        .await;

    Mock::given(method("GET"))
        .and(path("/menu"))
        .respond_with(html_page("Catering: events@beans.test"))
        .mount(&first_site)
        .await;

    // Same owner publishes the same address on a second site
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html_page("Write to OWNER@beans.test"))
        .mount(&second_site)
        .await;

    let sink = Arc::new(SqliteEmailSink::new_in_memory().unwrap());
    let coordinator = Coordinator::new(&create_test_crawler_config(), sink.clone()).unwrap();

    let summary = coordinator
        .run(vec![
            CandidateSite::new("Beans", first_site.uri()),
            CandidateSite::new("Beans Two", second_site.uri()),
            CandidateSite::new("No Website", ""),
        ])
        .await;

    assert_eq!(summary.candidates, 3);
    assert_eq!(summary.sites_crawled, 2);
    assert_eq!(summary.sites_without_emails, 0);
    assert_eq!(summary.emails_found, 3);
    assert_eq!(summary.emails_stored, 2);

    let mut stored: Vec<String> = sink
        .list_emails()
        .unwrap()
        .into_iter()
        .map(|record| record.email)
        .collect();
    stored.sort();
    assert_eq!(stored, vec!["events@beans.test", "owner@beans.test"]);
}

#[tokio::test]
async fn test_coordinator_keeps_going_past_dead_sites() {
    let live_site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact-us"))
        .respond_with(html_page("hello@alive.test"))
        .mount(&live_site)
        .await;

    let sink = Arc::new(SqliteEmailSink::new_in_memory().unwrap());
    let coordinator = Coordinator::new(&create_test_crawler_config(), sink.clone()).unwrap();

    let summary = coordinator
        .run(vec![
            CandidateSite::new("Closed", "http://127.0.0.1:1"),
            CandidateSite::new("Alive", live_site.uri()),
        ])
        .await;

    assert_eq!(summary.sites_crawled, 2);
    assert_eq!(summary.sites_without_emails, 1);
    assert_eq!(sink.count_emails().unwrap(), 1);
    assert!(!sink.insert_if_absent("Alive", &live_site.uri(), "hello@alive.test").unwrap());
}

#[tokio::test]
async fn test_run_scrape_with_mock_listing() {
    let overpass = MockServer::start().await;

    let listing = serde_json::json!({
        "elements": [
            { "tags": { "name": "Closed Cafe", "website": "http://closed-cafe.invalid/menu" } },
            { "tags": { "name": "Closed Again", "website": "closed-cafe.invalid/other" } },
            { "tags": { "name": "No Website" } },
            { "tags": { "website": "   " } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .expect(1)
        .mount(&overpass)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("emails.db");

    // Seed a stale row; a new run starts from an empty table
    {
        let stale = SqliteEmailSink::create(&db_path).unwrap();
        stale.insert_if_absent("Old", "http://old.test", "old@old.test").unwrap();
    }

    let config = Config {
        crawler: CrawlerConfig {
            fetch_timeout_ms: 100,
            retry_timeout_ms: 200,
            ..create_test_crawler_config()
        },
        source: SourceConfig {
            endpoint: format!("{}/api/interpreter", overpass.uri()),
            query: "[out:json];node[amenity=cafe];out;".to_string(),
            timeout_ms: 5_000,
        },
        output: OutputConfig {
            database_path: db_path.to_string_lossy().to_string(),
        },
    };

    let summary = run_scrape(config).await.unwrap();

    // Both websites collapse to the same origin, which can never resolve
    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.emails_stored, 0);

    let sink = SqliteEmailSink::open_existing(&db_path).unwrap();
    assert_eq!(sink.count_emails().unwrap(), 0);
}

#[tokio::test]
async fn test_run_scrape_fails_when_listing_fails() {
    let overpass = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&overpass)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        crawler: create_test_crawler_config(),
        source: SourceConfig {
            endpoint: overpass.uri(),
            ..SourceConfig::default()
        },
        output: OutputConfig {
            database_path: temp_dir.path().join("emails.db").to_string_lossy().to_string(),
        },
    };

    let result = run_scrape(config).await;
    assert!(result.is_err());
}
