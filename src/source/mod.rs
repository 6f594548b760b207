//! Candidate sources
//!
//! A candidate is a business with a website worth crawling. Candidates come
//! from the Overpass listing query; before crawling they are reduced to one
//! per bare domain so a chain with many branches is only crawled once.

mod overpass;

pub use overpass::{OverpassClient, OverpassElement, OverpassResponse, OverpassTags};

use crate::url::domain_of;
use std::collections::HashSet;

/// A business to crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSite {
    /// Display name from the listing, possibly empty
    pub name: String,

    /// Root origin of the website (`scheme://host`), or empty if unknown
    pub website: String,
}

impl CandidateSite {
    pub fn new(name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
        }
    }
}

/// Keeps the first candidate for each bare domain
///
/// Candidates whose website has no usable domain are dropped.
pub fn dedup_by_domain(candidates: Vec<CandidateSite>) -> Vec<CandidateSite> {
    let mut seen = HashSet::new();

    candidates
        .into_iter()
        .filter(|candidate| {
            let domain = domain_of(&candidate.website);
            !domain.is_empty() && seen.insert(domain)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_per_domain() {
        let candidates = vec![
            CandidateSite::new("Chain Soho", "https://www.chain.com"),
            CandidateSite::new("Indie", "http://indie.co.uk"),
            CandidateSite::new("Chain Leeds", "http://chain.com"),
        ];

        let unique = dedup_by_domain(candidates);
        assert_eq!(
            unique,
            vec![
                CandidateSite::new("Chain Soho", "https://www.chain.com"),
                CandidateSite::new("Indie", "http://indie.co.uk"),
            ]
        );
    }

    #[test]
    fn test_dedup_drops_empty_websites() {
        let candidates = vec![
            CandidateSite::new("No Site", ""),
            CandidateSite::new("Garbage", "not a url"),
            CandidateSite::new("Real", "http://real.com"),
        ];

        let unique = dedup_by_domain(candidates);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "Real");
    }

    #[test]
    fn test_dedup_keeps_distinct_subdomains() {
        let candidates = vec![
            CandidateSite::new("Main", "http://shop.com"),
            CandidateSite::new("Blog", "http://blog.shop.com"),
        ];
        assert_eq!(dedup_by_domain(candidates).len(), 2);
    }
}
