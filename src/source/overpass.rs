//! Overpass listing client
//!
//! Sends one Overpass QL query and turns the returned nodes into
//! [`CandidateSite`]s. The response is only trusted for the `name` and
//! `website` tags; everything else is ignored.

use crate::config::SourceConfig;
use crate::source::CandidateSite;
use crate::url::normalize_to_root;
use crate::ScraperError;
use reqwest::Client;
use serde::Deserialize;

/// Top-level Overpass JSON response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One node, way or relation from the response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassElement {
    #[serde(default)]
    pub tags: OverpassTags,
}

/// The tags the scraper cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassTags {
    pub name: Option<String>,
    pub website: Option<String>,
}

impl OverpassResponse {
    /// Converts listing elements into candidates with normalized origins
    ///
    /// Elements without a website tag, or whose website has no host, are
    /// dropped. Order is preserved.
    pub fn into_candidates(self) -> Vec<CandidateSite> {
        self.elements
            .into_iter()
            .filter_map(|element| {
                let website = element.tags.website?;
                let origin = normalize_to_root(&website)?;
                Some(CandidateSite {
                    name: element.tags.name.unwrap_or_default(),
                    website: origin,
                })
            })
            .collect()
    }
}

/// Client for an Overpass interpreter endpoint
pub struct OverpassClient {
    client: Client,
    endpoint: String,
    query: String,
}

impl OverpassClient {
    /// Builds a client with its own deadline, independent of crawl timeouts
    pub fn new(config: &SourceConfig, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(config.timeout())
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            query: config.query.clone(),
        })
    }

    /// Runs the listing query and returns normalized candidates
    ///
    /// Any failure here is fatal to the run: an unreachable endpoint, an
    /// error status, or a body that is not an Overpass JSON document.
    pub async fn fetch_candidates(&self) -> Result<Vec<CandidateSite>, ScraperError> {
        tracing::debug!("Querying listing endpoint {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("data", self.query.as_str())])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| self.data_source_error(source))?;

        let listing: OverpassResponse = response
            .json()
            .await
            .map_err(|source| self.data_source_error(source))?;

        tracing::debug!("Listing returned {} elements", listing.elements.len());

        Ok(listing.into_candidates())
    }

    fn data_source_error(&self, source: reqwest::Error) -> ScraperError {
        ScraperError::DataSource {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}
