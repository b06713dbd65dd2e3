//! Main application modules.
//!
//! This module provides utilities for URL validation, progress logging,
//! shutdown handling, and statistics printing used by the batch runner and
//! the CLI.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::install_ctrl_c_handler;
pub use statistics::print_error_statistics;
pub use url::{normalize_url_list, validate_and_normalize_url};
