//! Text helpers shared by the config layer and the HTTP client.

/// Trimmed value, or `None` when absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Base URL with surrounding whitespace and trailing slashes removed.
pub fn trim_base_url(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

/// `http://` or `https://` (any case) followed by at least one character.
pub fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
