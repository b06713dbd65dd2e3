//! Progress logging utilities.

use log::info;

/// Logs progress after a URL's device set completes.
pub fn log_progress(start_time: std::time::Instant, completed_urls: usize, total_urls: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed_urls as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {completed_urls}/{total_urls} URLs in {elapsed_secs:.2} seconds (~{rate:.2} URLs/sec)"
    );
}
