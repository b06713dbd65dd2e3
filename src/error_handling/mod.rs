//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization failures
//! - Failure categorization for the end-of-run statistics
//! - Statistics tracking across a batch

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_failure;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError};
