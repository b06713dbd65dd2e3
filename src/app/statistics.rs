//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Prints the per-category failure counts to the log.
///
/// Nothing is printed for a clean run.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_does_not_panic() {
        let stats = ProcessingStats::new();
        print_error_statistics(&stats);

        stats.increment_error(ErrorType::ServiceUnavailable);
        print_error_statistics(&stats);
    }
}
