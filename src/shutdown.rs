//! Process-wide stop flag and termination-signal wiring
//!
//! The stop flag is the only data crosswire shares across threads. The
//! signal handler performs a single atomic store; the supervisor's run
//! loop performs atomic loads. Nothing blocks between writer and
//! reader.

use std::sync::atomic::{AtomicBool, Ordering};

use eyre::{Context, Result};
use tracing::{debug, info};

static STOP: AtomicBool = AtomicBool::new(false);

/// The flag the supervisor's run loop polls
pub fn stop_flag() -> &'static AtomicBool {
    &STOP
}

/// Request shutdown, exactly as the signal handler does
pub fn request_stop() {
    debug!("request_stop: setting stop flag");
    STOP.store(true, Ordering::SeqCst);
}

/// Route SIGINT and SIGTERM into the stop flag
///
/// Installable once per process. The handler only stores to the flag;
/// that store is safe no matter what the main thread is doing at
/// delivery time.
pub fn install_signal_handlers() -> Result<()> {
    ctrlc::set_handler(request_stop).context("Failed to install termination signal handlers")?;
    info!("Termination signal handlers installed");
    Ok(())
}
