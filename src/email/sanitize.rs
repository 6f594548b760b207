/// Characters trimmed from both ends of a raw match
const WRAPPING_CHARS: &[char] = &[
    '<', '>', '"', '\'', ' ', ',', ';', ':', '(', ')', '[', ']', '{', '}',
];

/// Cleans a raw email candidate into its stored form
///
/// Trims whitespace and wrapping punctuation, lowercases, drops a leftover
/// `mailto:` prefix and cuts everything from the first `?`. The result may be
/// empty; callers discard empty addresses.
///
/// # Examples
///
/// ```
/// use contact_scraper::email::sanitize_email;
///
/// assert_eq!(sanitize_email(" <Info@Shop.com>, "), "info@shop.com");
/// assert_eq!(sanitize_email("mailto:hi@shop.com?subject=x"), "hi@shop.com");
/// ```
pub fn sanitize_email(raw: &str) -> String {
    let mut email = raw
        .trim()
        .trim_matches(|c| WRAPPING_CHARS.contains(&c))
        .to_lowercase();

    if let Some(rest) = email.strip_prefix("mailto:") {
        email = rest.to_string();
    }

    if let Some(idx) = email.find('?') {
        email.truncate(idx);
    }

    email.trim().to_string()
}
