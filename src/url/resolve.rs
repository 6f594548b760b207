use crate::url::domain::same_domain;

/// Schemes that never lead to a crawlable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:"];

/// Resolves an anchor href against a site origin into a same-domain URL
///
/// # Resolution Rules
///
/// | href | Result |
/// |------|--------|
/// | empty, `javascript:`, `mailto:`, `tel:` | rejected |
/// | `//host/path` | `http://host/path` |
/// | `/path` | `origin/path` |
/// | anything else not starting with `http` | `origin/` + href |
/// | `http...` | used as is |
///
/// The fragment and any trailing slash are then removed so the result can be
/// compared against a visited set. The link is admitted only when its bare
/// domain equals the origin's; cross-domain links return `None`.
///
/// # Examples
///
/// ```
/// use contact_scraper::url::resolve_link;
///
/// assert_eq!(
///     resolve_link("http://shop.com", "/menu"),
///     Some("http://shop.com/menu".to_string())
/// );
/// assert_eq!(resolve_link("http://shop.com", "https://other.com/x"), None);
/// ```
pub fn resolve_link(base_origin: &str, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    let mut absolute = if href.starts_with("//") {
        format!("http:{}", href)
    } else if href.starts_with('/') {
        format!("{}{}", base_origin, href)
    } else if !lower.starts_with("http") {
        format!("{}/{}", base_origin, href)
    } else {
        href.to_string()
    };

    if let Some(idx) = absolute.find('#') {
        absolute.truncate(idx);
    }

    let absolute = absolute.trim_end_matches('/').to_string();

    if same_domain(base_origin, &absolute) {
        Some(absolute)
    } else {
        None
    }
}
