// Retry orchestrator behavior: attempt budgets, failure classification,
// and backoff timing under a paused clock.

use std::time::Duration;

use pagespeed_batch::{run_with_backoff, Device, Task, TaskResult};

mod helpers;
use helpers::{metrics_with_score, status_failure, ScriptedSpeedTest};

fn task() -> Task {
    Task::new("https://example.com", Device::Mobile)
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_budget_reports_error_after_three_attempts() {
    let stub = ScriptedSpeedTest::always_failing(503);

    let outcome = run_with_backoff(&stub, &task(), 2).await;

    // retries=2 means initial attempt + 2 retries, no more
    assert_eq!(stub.calls(), 3);
    match outcome.result {
        TaskResult::Failed(failure) => assert_eq!(failure.status(), Some(503)),
        TaskResult::Success(_) => panic!("exhausted budget must produce an error outcome"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_then_success() {
    let stub = ScriptedSpeedTest::new(vec![
        Err(status_failure(503)),
        Err(status_failure(503)),
        Ok(metrics_with_score(87)),
    ]);

    let outcome = run_with_backoff(&stub, &task(), 2).await;

    assert_eq!(stub.calls(), 3);
    match outcome.result {
        TaskResult::Success(metrics) => assert_eq!(metrics.performance_score, Some(87)),
        TaskResult::Failed(failure) => panic!("expected success, got {failure}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_permanent_failure_is_not_retried() {
    let stub = ScriptedSpeedTest::always_failing(404);

    let outcome = run_with_backoff(&stub, &task(), 5).await;

    assert_eq!(stub.calls(), 1);
    match outcome.result {
        TaskResult::Failed(failure) => {
            assert_eq!(failure.status(), Some(404));
            assert!(!failure.is_transient());
        }
        TaskResult::Success(_) => panic!("404 must produce an error outcome"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_is_not_retried() {
    let stub = ScriptedSpeedTest::new(vec![Err(
        pagespeed_batch::FetchFailure::Transport {
            message: "connection reset by peer".into(),
        },
    )]);

    let outcome = run_with_backoff(&stub, &task(), 5).await;

    assert_eq!(stub.calls(), 1);
    assert!(!outcome.is_success());
}

#[tokio::test(start_paused = true)]
async fn test_zero_retries_means_single_attempt() {
    let stub = ScriptedSpeedTest::always_failing(429);

    let outcome = run_with_backoff(&stub, &task(), 0).await;

    assert_eq!(stub.calls(), 1);
    assert!(!outcome.is_success());
}

#[tokio::test(start_paused = true)]
async fn test_every_transient_status_consumes_the_budget() {
    for status in [429, 500, 502, 503, 504] {
        let stub = ScriptedSpeedTest::always_failing(status);
        let _ = run_with_backoff(&stub, &task(), 1).await;
        assert_eq!(stub.calls(), 2, "status {status} should be retried once");
    }
}

#[tokio::test(start_paused = true)]
async fn test_backoff_waits_double_between_attempts() {
    let stub = ScriptedSpeedTest::always_failing(503);

    let start = tokio::time::Instant::now();
    let _ = run_with_backoff(&stub, &task(), 3).await;

    // Waits are 1.5s + 3s + 6s of virtual time; the stub itself is instant.
    assert_eq!(start.elapsed(), Duration::from_millis(10_500));
    assert_eq!(stub.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_no_backoff_after_final_attempt() {
    let stub = ScriptedSpeedTest::always_failing(503);

    let start = tokio::time::Instant::now();
    let _ = run_with_backoff(&stub, &task(), 1).await;

    // One retry: a single 1.5s wait, and no sleep after the last failure.
    assert_eq!(start.elapsed(), Duration::from_millis(1_500));
}

#[tokio::test(start_paused = true)]
async fn test_missing_score_is_success_not_error() {
    let stub = ScriptedSpeedTest::new(vec![Ok(Default::default())]);

    let outcome = run_with_backoff(&stub, &task(), 2).await;

    assert_eq!(stub.calls(), 1);
    match outcome.result {
        TaskResult::Success(metrics) => assert_eq!(metrics.performance_score, None),
        TaskResult::Failed(failure) => panic!("expected success, got {failure}"),
    }
}
