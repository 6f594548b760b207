use url::Url;

/// Extracts the bare domain from a URL string
///
/// The host is lowercased and a single leading `www.` is removed, so
/// `https://www.example.com/x` and `http://example.com` share a domain.
/// Anything that does not parse yields an empty string, which callers treat
/// as "matches nothing".
///
/// # Examples
///
/// ```
/// use contact_scraper::url::domain_of;
///
/// assert_eq!(domain_of("https://www.example.com/x"), "example.com");
/// assert_eq!(domain_of("http://example.com"), "example.com");
/// assert_eq!(domain_of("not a url"), "");
/// ```
pub fn domain_of(url: &str) -> String {
    let parsed = match Url::parse(url.trim()) {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };

    let host = match parsed.host_str() {
        Some(host) => host.to_lowercase(),
        None => return String::new(),
    };

    match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => host,
    }
}

/// Returns true if both URLs have the same non-empty bare domain
pub fn same_domain(a: &str, b: &str) -> bool {
    let domain = domain_of(a);
    !domain.is_empty() && domain == domain_of(b)
}
