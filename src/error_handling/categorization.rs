//! Fetch error categorization.

use std::time::Duration;

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// HTTP status is checked first (set by `error_for_status`), then the
/// transport-level error kinds. `timeout` is the limit the request ran under
/// and is only used to describe a timeout.
pub fn categorize_fetch_error(error: &reqwest::Error, timeout: Duration) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status(status.as_u16());
    }

    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        // body, decode, redirect and anything else
        FetchError::Request(error.to_string())
    }
}
