use url::Url;

/// Normalizes a raw website string to its root origin (`scheme://host`)
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; an empty string has no origin
/// 2. Assume `http://` when no http(s) scheme is present
/// 3. Parse the URL; reject if malformed or if it has no host
/// 4. Drop port, path, query and fragment
///
/// The host is lowercased by the parser. The result never carries a trailing
/// slash, so normalizing an origin returns the same origin.
///
/// # Examples
///
/// ```
/// use contact_scraper::url::normalize_to_root;
///
/// assert_eq!(
///     normalize_to_root("  www.Example.com/menu?x=1 "),
///     Some("http://www.example.com".to_string())
/// );
/// assert_eq!(normalize_to_root(""), None);
/// ```
pub fn normalize_to_root(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let candidate = if has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&candidate).ok()?;
    let host = url.host_str().filter(|h| !h.is_empty())?;

    Some(format!("{}://{}", url.scheme(), host))
}

fn has_http_scheme(raw: &str) -> bool {
    let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
