//! URL handling module for Contact-Scraper
//!
//! This module provides origin normalization, bare-domain extraction and
//! same-domain link resolution. None of these functions fail loudly: a URL
//! that cannot be parsed simply yields no origin, an empty domain, or no link.

mod domain;
mod normalize;
mod resolve;

// Re-export main functions
pub use domain::{domain_of, same_domain};
pub use normalize::normalize_to_root;
pub use resolve::resolve_link;
