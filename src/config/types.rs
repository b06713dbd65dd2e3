//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic library use.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DELAY_SECS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, PAGESPEED_ENDPOINT,
};
use crate::models::Device;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line in the binary; constructible directly for
/// library and test use since every field is public.
///
/// # Examples
///
/// ```no_run
/// use pagespeed_batch::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     max_retries: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pagespeed_batch",
    about = "Bulk website speed tester backed by the Google PageSpeed Insights API",
    version
)]
pub struct Config {
    /// File to read URLs from, one candidate per line
    pub file: PathBuf,

    /// Google PageSpeed API key; falls back to the PAGESPEED_API_KEY
    /// environment variable (a .env file is honored)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Device strategies to test, tried in the order given
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["mobile", "desktop"]
    )]
    pub devices: Vec<Device>,

    /// Seconds to pause between requests (fractional allowed)
    #[arg(long = "delay", default_value_t = DEFAULT_DELAY_SECS)]
    pub delay_seconds: f64,

    /// Retries on 429/5xx responses before a task is reported as an error
    #[arg(long = "retries", default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Analysis endpoint (override for proxies or testing)
    #[arg(long, default_value = PAGESPEED_ENDPOINT)]
    pub endpoint: String,

    /// Write the results as CSV to this path (the table always prints to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            api_key: None,
            devices: vec![Device::Mobile, Device::Desktop],
            delay_seconds: DEFAULT_DELAY_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            endpoint: PAGESPEED_ENDPOINT.to_string(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(s)
    }
}
