//! Shared observability setup for the service binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize process-wide tracing/logging.
///
/// Emits JSON lines with timestamps; the filter comes from `RUST_LOG` and
/// falls back to `info`. Safe to call more than once (later calls are no-ops,
/// which keeps test binaries that share a process happy).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
