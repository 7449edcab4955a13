//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: keep the editing crates at
/// `debug` so swallowed persistence failures and ignored commands are
/// visible, everything else at `info`.
const DEFAULT_FILTER: &str =
    "info,recibo_header=debug,recibo_receipt=debug,recibo_persistence=debug";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). The hosting
/// shell calls this once at startup; the editing crates only emit events.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs with targets kept, so events filter and group per crate.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
