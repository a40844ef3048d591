//! Utility functions and helpers

/// Remove exactly one trailing `/` if present
pub fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Join a base URL and a path suffix, dropping one trailing slash from the base
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", trim_trailing_slash(base), path)
}

/// Interpret a flag value: case-insensitive "true" is true, anything else is false
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Whether a flag value is a recognizable boolean
pub fn is_boolean_literal(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

/// Mask a secret for display
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "****".to_string()
    }
}

/// Check whether a URL uses an http(s) scheme
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
