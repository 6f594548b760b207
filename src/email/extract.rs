use crate::email::sanitize::sanitize_email;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Longest address accepted from page text
pub const MAX_EMAIL_LEN: usize = 254;

/// Image extensions that look like a TLD to the address pattern (`logo@2x.png`)
const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".png", ".gif", ".svg", ".webp"];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,63}").unwrap());

/// Scans raw page text for email addresses
///
/// Every match is sanitized and must then contain `@`, be at most
/// [`MAX_EMAIL_LEN`] bytes long and not end in an image extension. The result
/// keeps first-seen order without duplicates.
///
/// # Examples
///
/// ```
/// use contact_scraper::email::extract_from_text;
///
/// let found = extract_from_text("Contact: Jane@Example.COM or sales@shop.co.uk, photo@2x.png");
/// assert_eq!(found, vec!["jane@example.com", "sales@shop.co.uk"]);
/// ```
pub fn extract_from_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut emails = Vec::new();

    for m in EMAIL_PATTERN.find_iter(text) {
        let email = sanitize_email(m.as_str());
        if !is_plausible(&email) {
            continue;
        }
        if seen.insert(email.clone()) {
            emails.push(email);
        }
    }

    emails
}

fn is_plausible(email: &str) -> bool {
    !email.is_empty()
        && email.contains('@')
        && email.len() <= MAX_EMAIL_LEN
        && !IMAGE_SUFFIXES.iter().any(|suffix| email.ends_with(suffix))
}

/// Splits a `mailto:` href into its recipient addresses
///
/// The `mailto:` prefix is matched case-insensitively, query parameters such
/// as `subject=` are dropped, and recipients separated by `,` or `;` are
/// returned individually. Parts are trimmed but otherwise left as written;
/// run them through [`sanitize_email`] before storing.
///
/// # Examples
///
/// ```
/// use contact_scraper::email::extract_from_mailto;
///
/// assert_eq!(
///     extract_from_mailto("mailto:a@x.com,b@x.com?subject=Hi"),
///     vec!["a@x.com", "b@x.com"]
/// );
/// ```
pub fn extract_from_mailto(href: &str) -> Vec<String> {
    let href = href.trim();
    let recipients = match href.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => &href[7..],
        _ => href,
    };

    let recipients = match recipients.find('?') {
        Some(idx) => &recipients[..idx],
        None => recipients,
    };

    recipients
        .split(|c| c == ',' || c == ';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
