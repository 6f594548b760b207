//! HTML parser for extracting crawl links and mailto recipients
//!
//! This module handles parsing a fetched page to extract:
//! - Same-domain links to follow (from `<a href>` tags)
//! - Email addresses from `mailto:` anchors

use crate::email::{extract_from_mailto, sanitize_email};
use crate::url::resolve_link;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Same-domain links found on the page, resolved and in document order
    pub links: Vec<String>,

    /// Sanitized addresses from `mailto:` anchors, first-seen order
    pub mailto_emails: Vec<String>,
}

/// Parses HTML content and extracts links and mailto addresses
///
/// # Link Extraction Rules
///
/// Every `<a href>` is considered. `mailto:` anchors contribute their
/// recipients to `mailto_emails`; all other hrefs go through
/// [`resolve_link`] against `origin`, which drops other schemes and
/// cross-domain targets.
///
/// Parsing never fails. Broken markup is repaired by the HTML5 tree builder,
/// so a page with unclosed or misnested tags still yields whatever anchors
/// the builder recovers, possibly more than once.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `origin` - The origin of the site being crawled
///
/// # Example
///
/// ```
/// use contact_scraper::crawler::parse_html;
///
/// let html = r#"<a href="/menu">Menu</a> <a href="mailto:Hi@Shop.com">Mail</a>"#;
/// let parsed = parse_html(html, "http://shop.com");
/// assert_eq!(parsed.links, vec!["http://shop.com/menu"]);
/// assert_eq!(parsed.mailto_emails, vec!["hi@shop.com"]);
/// ```
pub fn parse_html(html: &str, origin: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    let mut page = ParsedPage::default();
    let mut seen_emails = HashSet::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let href = match element.value().attr("href") {
            Some(href) => href.trim(),
            None => continue,
        };

        if is_mailto(href) {
            for recipient in extract_from_mailto(href) {
                let email = sanitize_email(&recipient);
                if !email.is_empty() && seen_emails.insert(email.clone()) {
                    page.mailto_emails.push(email);
                }
            }
            continue;
        }

        if let Some(link) = resolve_link(origin, href) {
            page.links.push(link);
        }
    }

    page
}

fn is_mailto(href: &str) -> bool {
    href.get(..7)
        .map(|prefix| prefix.eq_ignore_ascii_case("mailto:"))
        .unwrap_or(false)
}
