//! pagespeed_batch library: bulk website speed testing.
//!
//! This library drives the Google PageSpeed Insights API over a list of URLs
//! across one or more device strategies, retrying transient failures with
//! exponential backoff, and aggregates one normalized outcome per
//! (URL, device) pair into an exportable report.
//!
//! # Example
//!
//! ```no_run
//! use pagespeed_batch::{run_audit, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config, "my-api-key", |_| {}, CancellationToken::new()).await?;
//! println!(
//!     "Resolved {} tasks: {} succeeded, {} failed",
//!     report.total_tasks, report.successful, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod models;
mod retry;
mod run;

// Re-export public API
pub use app::{install_ctrl_c_handler, normalize_url_list, validate_and_normalize_url};
pub use config::{Config, LogFormat, LogLevel};
pub use export::{export_csv, render_table, ResultRow};
pub use fetch::{FetchFailure, PageSpeedClient, PageSpeedMetrics, SpeedTest};
pub use models::{Device, Outcome, Task, TaskResult};
pub use retry::{retry_schedule, run_with_backoff};
pub use run::{run_audit, run_batch, AuditReport, BatchOptions, BatchProgress};
