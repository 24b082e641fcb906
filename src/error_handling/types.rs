//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to obtain HTML for a URL.
///
/// Never escapes the analysis entry points: the orchestrator turns every
/// variant into a `fetch-failure` issue on a zero-score result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL is syntactically invalid, too long, or not http(s).
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetch did not complete within the allotted time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-success status code.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body exceeds the size limit.
    #[error("response body of {size} bytes exceeds limit of {limit} bytes")]
    BodyTooLarge {
        /// Observed (or announced) body size
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Any other request or body decoding failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// Contract violations rejected at the request boundary, before the engine runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// `input_type` was neither `html` nor `url`.
    #[error("input_type must be either \"html\" or \"url\", got \"{0}\"")]
    UnknownInputType(String),
}
