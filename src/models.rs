//! Core data types: tasks and their terminal outcomes.

use std::fmt;

use clap::ValueEnum;

use crate::fetch::{FetchFailure, PageSpeedMetrics};

/// Analysis profile understood by the PageSpeed API's `strategy` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Device {
    /// Simulated mid-tier phone over a slow connection
    Mobile,
    /// Emulated desktop viewport and connection
    Desktop,
}

impl Device {
    /// The wire value sent as the `strategy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (URL, device) unit of work.
///
/// Tasks are generated by the batch runner from the cross product of the
/// validated URL list and the selected devices, and consumed exactly once by
/// the retry orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Normalized, validated URL to analyze
    pub url: String,
    /// Device strategy for this probe
    pub device: Device,
}

impl Task {
    /// Creates a new task.
    pub fn new(url: impl Into<String>, device: Device) -> Self {
        Task {
            url: url.into(),
            device,
        }
    }
}

/// Terminal result of one task: metrics on success, the classified failure
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    /// The API call succeeded and the metrics were extracted.
    Success(PageSpeedMetrics),
    /// The call failed permanently or exhausted its retry budget.
    Failed(FetchFailure),
}

/// The immutable terminal record of a task.
///
/// Exactly one outcome exists per task regardless of how many retry attempts
/// were made. Failures are ordinary values here, not errors: a failed probe
/// becomes a report row like any other.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// URL copied from the task
    pub url: String,
    /// Device copied from the task
    pub device: Device,
    /// Success metrics or failure description
    pub result: TaskResult,
}

impl Outcome {
    /// Builds a success outcome for `task`.
    pub fn success(task: &Task, metrics: PageSpeedMetrics) -> Self {
        Outcome {
            url: task.url.clone(),
            device: task.device,
            result: TaskResult::Success(metrics),
        }
    }

    /// Builds a failure outcome for `task`.
    pub fn failure(task: &Task, failure: FetchFailure) -> Self {
        Outcome {
            url: task.url.clone(),
            device: task.device,
            result: TaskResult::Failed(failure),
        }
    }

    /// True when the task produced metrics rather than an error row.
    pub fn is_success(&self) -> bool {
        matches!(self.result, TaskResult::Success(_))
    }
}
