//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initializes message-only logging on stdout.
///
/// `debug` raises the filter to debug level; otherwise only info and above
/// are shown. Safe to call more than once — later calls are no-ops.
pub fn init(debug: bool) {
    let filter = EnvFilter::new(if debug { "debug" } else { "info" });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init();
}
