//! Processing statistics tracking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Counters for each failure category, initialized to zero on creation.
///
/// The batch runs on one thread, but the counters stay atomic so the tracker
/// can be shared freely should a concurrent runner ever sit in front of it.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every category at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProcessingStats { errors }
    }

    /// Increments the counter for `error`.
    ///
    /// All categories are inserted by `new()`; a missing entry indicates an
    /// initialization bug, which is logged rather than panicking.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                error
            );
        }
    }

    /// The count recorded for `error`.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all categories.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
