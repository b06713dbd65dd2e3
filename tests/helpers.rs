// Shared test helpers: a scripted speed-test stub with call accounting.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use pagespeed_batch::{Device, FetchFailure, PageSpeedMetrics, SpeedTest};

/// A `SpeedTest` double that replays a scripted response sequence.
///
/// Responses are consumed front to back; once the script is exhausted every
/// further call answers with the fallback. Calls are counted and logged so
/// tests can assert on attempt counts and task ordering.
#[allow(dead_code)] // Not every test file exercises every helper
pub struct ScriptedSpeedTest {
    script: Mutex<VecDeque<Result<PageSpeedMetrics, FetchFailure>>>,
    fallback: Result<PageSpeedMetrics, FetchFailure>,
    calls: AtomicUsize,
    call_log: Mutex<Vec<(String, Device)>>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedSpeedTest {
    /// A stub that replays `script`, then falls back to empty-metric successes.
    pub fn new(script: Vec<Result<PageSpeedMetrics, FetchFailure>>) -> Self {
        ScriptedSpeedTest {
            script: Mutex::new(script.into()),
            fallback: Ok(PageSpeedMetrics::default()),
            calls: AtomicUsize::new(0),
            call_log: Mutex::new(Vec::new()),
        }
    }

    /// A stub that answers every call with the given HTTP status failure.
    pub fn always_failing(status: u16) -> Self {
        ScriptedSpeedTest {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(status_failure(status)),
            calls: AtomicUsize::new(0),
            call_log: Mutex::new(Vec::new()),
        }
    }

    /// A stub that answers every call with the given score.
    pub fn always_scoring(score: u8) -> Self {
        ScriptedSpeedTest {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(metrics_with_score(score)),
            calls: AtomicUsize::new(0),
            call_log: Mutex::new(Vec::new()),
        }
    }

    /// Total number of `fetch` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (url, device) pairs fetched, in call order.
    pub fn call_log(&self) -> Vec<(String, Device)> {
        self.call_log.lock().expect("call log lock").clone()
    }
}

#[async_trait]
impl SpeedTest for ScriptedSpeedTest {
    async fn fetch(&self, url: &str, device: Device) -> Result<PageSpeedMetrics, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_log
            .lock()
            .expect("call log lock")
            .push((url.to_string(), device));
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Builds an HTTP status failure the way the real client classifies one.
#[allow(dead_code)] // Used by other test files
pub fn status_failure(status: u16) -> FetchFailure {
    FetchFailure::Status {
        status,
        message: format!("status {status}"),
    }
}

/// Metrics with only the performance score populated.
#[allow(dead_code)] // Used by other test files
pub fn metrics_with_score(score: u8) -> PageSpeedMetrics {
    PageSpeedMetrics {
        performance_score: Some(score),
        ..Default::default()
    }
}
