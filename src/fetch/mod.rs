//! Speed-test client for the PageSpeed API.
//!
//! [`SpeedTest`] is the seam between the retry orchestrator and the network:
//! production code talks to [`PageSpeedClient`], tests substitute a scripted
//! stub. One call performs one probe; all retrying lives a layer up.

mod failure;
mod response;

pub use failure::FetchFailure;
pub use response::PageSpeedMetrics;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::models::Device;
use response::PageSpeedResponse;

/// A single synchronous speed probe for one (URL, device) pair.
#[async_trait]
pub trait SpeedTest {
    /// Runs one analysis and returns the extracted metrics, or the classified
    /// failure. Implementations must not retry internally.
    async fn fetch(&self, url: &str, device: Device) -> Result<PageSpeedMetrics, FetchFailure>;
}

/// Production client for the PageSpeed Insights v5 endpoint.
pub struct PageSpeedClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    /// Creates a client that probes `endpoint` authenticated with `api_key`.
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        PageSpeedClient {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl SpeedTest for PageSpeedClient {
    async fn fetch(&self, url: &str, device: Device) -> Result<PageSpeedMetrics, FetchFailure> {
        debug!("Requesting analysis for {url} ({device})");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("url", url),
                ("strategy", device.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                message: format!(
                    "{} for {url}",
                    status.canonical_reason().unwrap_or("unexpected status")
                ),
            });
        }

        let body: PageSpeedResponse = response.json().await?;
        Ok(PageSpeedMetrics::from_response(body))
    }
}
