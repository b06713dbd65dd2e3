//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with the per-request timeout from
/// the configuration and this tool's User-Agent. One client is built per run
/// and shared across every probe so connections get reused.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }
}
