//! Page fetching for URL-mode analysis.
//!
//! The engine never talks to the network directly; it goes through the
//! [`Fetcher`] trait. [`HttpFetcher`] is the `reqwest` implementation used by
//! the binary, tests substitute their own.

mod url_validation;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use log::debug;

use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_fetch_error, FetchError, InitializationError};
use crate::initialization::init_client;

pub use url_validation::validate_and_normalize_url;

/// Resolves a URL into HTML text.
///
/// Implementations should honor `timeout`; the orchestrator additionally
/// bounds the whole call with the same duration. A single failure is final,
/// callers do not retry.
pub trait Fetcher {
    /// Fetches the body of `url` as text.
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// `reqwest`-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    max_body_size: usize,
}

impl HttpFetcher {
    /// Builds a fetcher with a client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client(config)?))
    }

    /// Wraps an existing client.
    pub fn with_client(client: Arc<reqwest::Client>) -> Self {
        HttpFetcher {
            client,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }

    /// Overrides the response size limit.
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        debug!("Fetching {url}");
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| categorize_fetch_error(&e, timeout))?;

        let response = response
            .error_for_status()
            .map_err(|e| categorize_fetch_error(&e, timeout))?;

        if let Some(announced) = response.content_length() {
            let announced = usize::try_from(announced).unwrap_or(usize::MAX);
            if announced > self.max_body_size {
                return Err(FetchError::BodyTooLarge {
                    size: announced,
                    limit: self.max_body_size,
                });
            }
        }

        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| categorize_fetch_error(&e, timeout)));
        let body = read_body_with_limit(chunks, self.max_body_size).await?;

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

/// Collects a chunked body, aborting as soon as it grows past `limit`.
///
/// Invalid UTF-8 is replaced rather than rejected.
async fn read_body_with_limit<S, B>(chunks: S, limit: usize) -> Result<String, FetchError>
where
    S: Stream<Item = Result<B, FetchError>>,
    B: AsRef<[u8]>,
{
    let mut chunks = std::pin::pin!(chunks);
    let mut buf = Vec::with_capacity(limit.min(16 * 1024));

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        let chunk = chunk.as_ref();
        if buf.len() + chunk.len() > limit {
            return Err(FetchError::BodyTooLarge {
                size: buf.len() + chunk.len(),
                limit,
            });
        }
        buf.extend_from_slice(chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
