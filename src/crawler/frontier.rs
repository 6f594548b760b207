//! Per-site crawl frontier
//!
//! The frontier owns the breadth-first queue, the visited set and the page
//! budget for one site. It is created when a site crawl starts and dropped
//! when it ends; workers never share one.

use std::collections::{HashSet, VecDeque};

/// Paths tried on every site before any link is discovered
pub const SEED_PATHS: &[&str] = &["", "/contact", "/contact-us"];

/// FIFO frontier with a visited set and a page budget
#[derive(Debug)]
pub struct CrawlFrontier {
    /// URLs waiting for a fetch attempt, in discovery order
    queue: VecDeque<String>,

    /// Normalized URLs already handed out
    visited: HashSet<String>,

    /// Pages fetched successfully so far
    pages_fetched: u32,

    /// Maximum number of successful fetches
    page_budget: u32,
}

impl CrawlFrontier {
    /// Creates an empty frontier
    pub fn new(page_budget: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            pages_fetched: 0,
            page_budget,
        }
    }

    /// Creates a frontier seeded with the origin and its likely contact pages
    pub fn seeded(origin: &str, page_budget: u32) -> Self {
        let mut frontier = Self::new(page_budget);
        for path in SEED_PATHS {
            frontier.queue.push_back(format!("{}{}", origin, path));
        }
        frontier
    }

    /// Hands out the next unvisited URL, marking it visited
    ///
    /// Returns `None` once the queue is exhausted or the page budget is
    /// spent. URLs are compared without a trailing slash.
    pub fn next_url(&mut self) -> Option<String> {
        while !self.budget_spent() {
            let url = self.queue.pop_front()?;
            let url = url.trim_end_matches('/').to_string();

            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }

        None
    }

    /// Queues a discovered URL unless it has already been visited
    ///
    /// The queue itself is unbounded; the page budget is what stops a crawl.
    pub fn enqueue(&mut self, url: String) {
        if !self.visited.contains(url.trim_end_matches('/')) {
            self.queue.push_back(url);
        }
    }

    /// Counts a successful fetch against the budget
    pub fn record_fetched(&mut self) {
        self.pages_fetched += 1;
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    fn budget_spent(&self) -> bool {
        self.pages_fetched >= self.page_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let mut frontier = CrawlFrontier::seeded("http://shop.com", 10);
        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com"));
        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/contact"));
        assert_eq!(
            frontier.next_url().as_deref(),
            Some("http://shop.com/contact-us")
        );
        assert_eq!(frontier.next_url(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = CrawlFrontier::new(10);
        frontier.enqueue("http://shop.com/a".to_string());
        frontier.enqueue("http://shop.com/b".to_string());
        frontier.enqueue("http://shop.com/c".to_string());

        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/a"));
        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/b"));
        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/c"));
    }

    #[test]
    fn test_skips_visited() {
        let mut frontier = CrawlFrontier::new(10);
        frontier.enqueue("http://shop.com/menu".to_string());
        frontier.enqueue("http://shop.com/menu/".to_string());

        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/menu"));
        assert_eq!(frontier.next_url(), None);
    }

    #[test]
    fn test_enqueue_ignores_visited() {
        let mut frontier = CrawlFrontier::seeded("http://shop.com", 10);
        let first = frontier.next_url().unwrap();
        let before = frontier.queued();

        frontier.enqueue(first);
        frontier.enqueue("http://shop.com/".to_string());

        assert_eq!(frontier.queued(), before);
        assert!(frontier.visited.contains("http://shop.com"));
    }

    #[test]
    fn test_budget_stops_frontier() {
        let mut frontier = CrawlFrontier::new(2);
        for i in 0..100 {
            frontier.enqueue(format!("http://shop.com/page/{}", i));
        }

        let mut handed_out = 0;
        while frontier.next_url().is_some() {
            frontier.record_fetched();
            handed_out += 1;
        }

        assert_eq!(handed_out, 2);
        assert_eq!(frontier.pages_fetched(), 2);
        assert_eq!(frontier.queued(), 98);
    }

    #[test]
    fn test_failed_pages_do_not_spend_budget() {
        let mut frontier = CrawlFrontier::new(1);
        frontier.enqueue("http://shop.com/slow".to_string());
        frontier.enqueue("http://shop.com/fast".to_string());

        // First URL fails and is not recorded.
        assert!(frontier.next_url().is_some());
        assert_eq!(frontier.next_url().as_deref(), Some("http://shop.com/fast"));
        frontier.record_fetched();
        assert_eq!(frontier.next_url(), None);
    }
}
