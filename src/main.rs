//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `pagespeed_batch` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Progress bar rendering and user-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use tokio_util::sync::CancellationToken;

use pagespeed_batch::config::API_KEY_ENV;
use pagespeed_batch::export::{export_csv, render_table};
use pagespeed_batch::initialization::init_logger_with;
use pagespeed_batch::{install_ctrl_c_handler, run_audit, BatchProgress, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists).
    // Try the current directory first, then next to the executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let api_key = match config.api_key.clone() {
        Some(key) => key,
        None => std::env::var(API_KEY_ENV).with_context(|| {
            format!("No API key provided: pass --api-key or set {API_KEY_ENV}")
        })?,
    };

    // One ctrl-c stops the run at the next task boundary; partial results
    // are still rendered and exported.
    let cancel = CancellationToken::new();
    install_ctrl_c_handler(cancel.clone());

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} URLs")
            .context("Failed to build progress bar style")?,
    );
    let bar_for_progress = bar.clone();
    let on_progress = move |progress: BatchProgress| {
        bar_for_progress.set_length(progress.total_urls as u64);
        bar_for_progress.set_position(progress.completed_urls as u64);
    };

    match run_audit(&config, &api_key, on_progress, cancel).await {
        Ok(report) => {
            bar.finish_and_clear();

            println!("{}", render_table(&report.outcomes));

            if let Some(path) = &config.output {
                let written = export_csv(&report.outcomes, Some(path))?;
                println!("Wrote {} rows to {}", written, path.display());
            }

            println!(
                "✅ Resolved {} task{} ({} succeeded, {} failed) in {:.1}s",
                report.total_tasks,
                if report.total_tasks == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            bar.finish_and_clear();
            eprintln!("pagespeed_batch error: {:#}", e);
            process::exit(1);
        }
    }
}
