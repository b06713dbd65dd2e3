//! Graceful shutdown handling.

use log::warn;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on the first ctrl-c.
///
/// The batch runner checks the token once per task boundary, so the task in
/// flight (including its retries) still runs to its terminal outcome before
/// the run stops and the partial results are reported.
pub fn install_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received; finishing the current task before stopping");
            cancel.cancel();
        }
    });
}
