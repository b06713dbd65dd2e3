//! Flat report row shared by the CSV export and the terminal table.

use tabled::Tabled;

use crate::models::{Outcome, TaskResult};

/// The literal written in the score column for a failed task.
const ERROR_SENTINEL: &str = "Error";

/// One rendered report row.
///
/// A failed task renders with `Error` in the score column and the failure
/// description in the FCP column; a successful probe with no reported score
/// leaves the score cell empty.
#[derive(Debug, Clone, Tabled)]
pub struct ResultRow {
    /// Tested URL
    #[tabled(rename = "URL")]
    pub url: String,
    /// Device strategy
    #[tabled(rename = "Device")]
    pub device: String,
    /// Score 0-100, empty, or the error sentinel
    #[tabled(rename = "Performance Score")]
    pub performance_score: String,
    /// First Contentful Paint, or the error description on failure
    #[tabled(rename = "FCP")]
    pub fcp: String,
    /// Largest Contentful Paint
    #[tabled(rename = "LCP")]
    pub lcp: String,
    /// Total Blocking Time
    #[tabled(rename = "TBT")]
    pub tbt: String,
    /// Cumulative Layout Shift
    #[tabled(rename = "CLS")]
    pub cls: String,
}

impl ResultRow {
    /// Column titles, in output order.
    pub const HEADER: [&'static str; 7] = [
        "URL",
        "Device",
        "Performance Score",
        "FCP",
        "LCP",
        "TBT",
        "CLS",
    ];

    /// The row's cells in column order, for record-oriented writers.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.url,
            &self.device,
            &self.performance_score,
            &self.fcp,
            &self.lcp,
            &self.tbt,
            &self.cls,
        ]
    }
}

impl From<&Outcome> for ResultRow {
    fn from(outcome: &Outcome) -> Self {
        match &outcome.result {
            TaskResult::Success(metrics) => ResultRow {
                url: outcome.url.clone(),
                device: outcome.device.to_string(),
                performance_score: metrics
                    .performance_score
                    .map(|score| score.to_string())
                    .unwrap_or_default(),
                fcp: metrics.first_contentful_paint.clone(),
                lcp: metrics.largest_contentful_paint.clone(),
                tbt: metrics.total_blocking_time.clone(),
                cls: metrics.cumulative_layout_shift.clone(),
            },
            TaskResult::Failed(failure) => ResultRow {
                url: outcome.url.clone(),
                device: outcome.device.to_string(),
                performance_score: ERROR_SENTINEL.to_string(),
                fcp: failure.to_string(),
                lcp: String::new(),
                tbt: String::new(),
                cls: String::new(),
            },
        }
    }
}
