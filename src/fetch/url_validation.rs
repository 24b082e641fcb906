//! URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates and normalizes a URL.
///
/// Trims surrounding whitespace, adds an `https://` prefix if no scheme is
/// present, then checks the result parses and uses http or https.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` for empty, over-long, unparseable or
/// non-http(s) URLs.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("empty URL".to_string()));
    }

    let normalized = if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    // Checked after adding the prefix, which can push it over the limit
    if normalized.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Ok(normalized),
            scheme => Err(FetchError::InvalidUrl(format!(
                "unsupported scheme \"{scheme}\""
            ))),
        },
        Err(e) => Err(FetchError::InvalidUrl(format!("{url}: {e}"))),
    }
}

/// True when `url` starts with `scheme://`, where the scheme is a letter
/// followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
