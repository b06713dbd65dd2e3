//! Batch execution: the sequential runner and the file-to-report entry point.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, normalize_url_list, print_error_statistics};
use crate::config::Config;
use crate::error_handling::{categorize_failure, ProcessingStats};
use crate::fetch::{PageSpeedClient, SpeedTest};
use crate::initialization::init_client;
use crate::models::{Device, Outcome, Task, TaskResult};
use crate::retry::run_with_backoff;

/// Tuning knobs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Pause inserted after every (URL, device) pair
    pub delay: Duration,
    /// Retry budget per task for transient failures
    pub max_retries: usize,
}

/// Progress snapshot emitted after each URL's full device set completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// URLs fully resolved so far
    pub completed_urls: usize,
    /// URLs in this run
    pub total_urls: usize,
}

impl BatchProgress {
    /// Completed fraction in [0, 1]; 1.0 for an empty run.
    pub fn fraction(&self) -> f64 {
        if self.total_urls == 0 {
            1.0
        } else {
            self.completed_urls as f64 / self.total_urls as f64
        }
    }
}

/// Summary of a completed (or cancelled) audit run.
#[derive(Debug)]
pub struct AuditReport {
    /// One outcome per (URL, device) pair, in task-generation order
    pub outcomes: Vec<Outcome>,
    /// Number of tasks resolved
    pub total_tasks: usize,
    /// Tasks that produced metrics
    pub successful: usize,
    /// Tasks reported as error rows
    pub failed: usize,
    /// Wall-clock duration of the batch in seconds
    pub elapsed_seconds: f64,
}

/// Runs the full cross product of `urls` x `devices` strictly sequentially.
///
/// URLs iterate in the outer loop, devices in the caller-given inner order.
/// Each pair is resolved to exactly one [`Outcome`] before the next begins;
/// a failed pair never aborts the batch. When `options.delay` is non-zero the
/// runner pauses that long after every pair, including between devices of the
/// same URL. `on_progress` fires after each URL's device set completes.
///
/// The cancellation token is checked once per task boundary: cancelling stops
/// the run before the next task starts and returns the outcomes collected so
/// far.
pub async fn run_batch<C, F>(
    client: &C,
    urls: &[String],
    devices: &[Device],
    options: &BatchOptions,
    mut on_progress: F,
    cancel: &CancellationToken,
) -> Vec<Outcome>
where
    C: SpeedTest,
    F: FnMut(BatchProgress),
{
    let total_urls = urls.len();
    let mut outcomes = Vec::with_capacity(total_urls * devices.len());

    'urls: for (index, url) in urls.iter().enumerate() {
        info!("Testing: {url}");
        for device in devices {
            if cancel.is_cancelled() {
                warn!(
                    "Cancellation requested; stopping after {} of {} tasks",
                    outcomes.len(),
                    total_urls * devices.len()
                );
                break 'urls;
            }

            let task = Task::new(url.clone(), *device);
            let outcome = run_with_backoff(client, &task, options.max_retries).await;
            outcomes.push(outcome);

            if !options.delay.is_zero() {
                sleep(options.delay).await;
            }
        }
        on_progress(BatchProgress {
            completed_urls: index + 1,
            total_urls,
        });
    }

    outcomes
}

/// Runs a complete audit from an input file to an [`AuditReport`].
///
/// Reads and normalizes the URL file, builds the HTTP client, drives the
/// batch, and tallies failure statistics. This is the library entry point the
/// CLI wraps; rendering stays with the caller, which observes progress
/// through `on_progress`.
///
/// # Errors
///
/// Fails only on an unreadable input file, an invalid delay, or HTTP client
/// construction; individual task failures become ordinary error outcomes.
pub async fn run_audit<F>(
    config: &Config,
    api_key: &str,
    mut on_progress: F,
    cancel: CancellationToken,
) -> Result<AuditReport>
where
    F: FnMut(BatchProgress),
{
    let raw = tokio::fs::read_to_string(&config.file)
        .await
        .with_context(|| format!("Failed to read input file: {}", config.file.display()))?;

    let urls = normalize_url_list(&raw);
    info!("{} unique, valid URLs loaded", urls.len());

    let delay = Duration::try_from_secs_f64(config.delay_seconds)
        .context("Delay must be a non-negative number of seconds")?;
    let options = BatchOptions {
        delay,
        max_retries: config.max_retries,
    };

    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let speed_client = PageSpeedClient::new(client, config.endpoint.clone(), api_key);

    let start_time = std::time::Instant::now();
    let outcomes = run_batch(
        &speed_client,
        &urls,
        &config.devices,
        &options,
        |progress| {
            log_progress(start_time, progress.completed_urls, progress.total_urls);
            on_progress(progress);
        },
        &cancel,
    )
    .await;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    let stats = ProcessingStats::new();
    for outcome in &outcomes {
        if let TaskResult::Failed(failure) = &outcome.result {
            stats.increment_error(categorize_failure(failure));
        }
    }
    print_error_statistics(&stats);

    let total_tasks = outcomes.len();
    let successful = outcomes.iter().filter(|o| o.is_success()).count();
    Ok(AuditReport {
        total_tasks,
        successful,
        failed: total_tasks - successful,
        elapsed_seconds,
        outcomes,
    })
}
