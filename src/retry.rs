//! Retry orchestration with exponential backoff.
//!
//! [`run_with_backoff`] turns every (URL, device) invocation into exactly one
//! terminal [`Outcome`]: success metrics, or an error record once the failure
//! is permanent or the retry budget is spent. No error escapes this boundary.

use std::time::Duration;

use log::{debug, warn};
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::RetryIf;

use crate::config::{RETRY_DELAY_SCALE_MS, RETRY_DOUBLING_BASE};
use crate::fetch::{FetchFailure, SpeedTest};
use crate::models::{Outcome, Task};

/// Builds the backoff schedule: 1.5s, 3s, 6s, ... with unconditional
/// doubling, no jitter and no ceiling, limited to `max_retries` waits.
///
/// The schedule grows without bound, so large retry counts translate into
/// very long worst-case waits (10 retries already ends at ~12.8 minutes).
pub fn retry_schedule(max_retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_DOUBLING_BASE)
        .factor(RETRY_DELAY_SCALE_MS)
        .take(max_retries)
}

/// Resolves one task to its terminal outcome.
///
/// Calls the client up to `max_retries + 1` times, sleeping through the
/// backoff schedule between attempts. Only transient failures (429 and the
/// retryable 5xx family) consume the budget; permanent and transport
/// failures short-circuit to an error outcome on the first attempt.
pub async fn run_with_backoff<C: SpeedTest>(
    client: &C,
    task: &Task,
    max_retries: usize,
) -> Outcome {
    let result = RetryIf::spawn(
        retry_schedule(max_retries),
        || client.fetch(&task.url, task.device),
        |failure: &FetchFailure| failure.is_transient(),
    )
    .await;

    match result {
        Ok(metrics) => {
            debug!("Probe succeeded for {} ({})", task.url, task.device);
            Outcome::success(task, metrics)
        }
        Err(failure) => {
            warn!(
                "Probe failed for {} ({}): {failure}",
                task.url, task.device
            );
            Outcome::failure(task, failure)
        }
    }
}
