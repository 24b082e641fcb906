//! HTTP client initialization.

use std::sync::Arc;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall and connect timeouts from the config
/// - Default redirect following (up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.fetch_timeout)
        .connect_timeout(config.fetch_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }
}
