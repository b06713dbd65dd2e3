//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: the API endpoint, timeouts, retry tuning, and defaults.

/// Google PageSpeed Insights v5 endpoint.
///
/// Overridable via `--endpoint` for self-hosted proxies and tests.
pub const PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable consulted when `--api-key` is not passed.
pub const API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Per-request timeout in seconds.
///
/// A PageSpeed analysis takes the API tens of seconds for slow pages, so this
/// is much higher than a typical HTTP timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default pause between consecutive API requests in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Default number of retries on transient (429/5xx) failures.
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// User-Agent sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("pagespeed_batch/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length accepted from the input file.
/// Matches common browser and server limits; longer lines are dropped.
pub const MAX_URL_LENGTH: usize = 2048;

// Retry strategy
/// Doubling base handed to the exponential backoff strategy.
pub const RETRY_DOUBLING_BASE: u64 = 2;
/// Scale applied to each backoff step, in milliseconds.
/// With a doubling base of 2 the schedule works out to 1.5s, 3s, 6s, ...
pub const RETRY_DELAY_SCALE_MS: u64 = 750;

/// HTTP statuses treated as transient and therefore worth retrying:
/// rate limiting plus the retryable server-side 5xx family.
pub const TRANSIENT_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

// Lighthouse audit ids extracted into the report
/// Audit id of the First Contentful Paint display value
pub const AUDIT_FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";
/// Audit id of the Largest Contentful Paint display value
pub const AUDIT_LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
/// Audit id of the Total Blocking Time display value
pub const AUDIT_TOTAL_BLOCKING_TIME: &str = "total-blocking-time";
/// Audit id of the Cumulative Layout Shift display value
pub const AUDIT_CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
