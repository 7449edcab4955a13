//! Shared tracing/logging setup for the receipt editor.
//!
//! The editing core never surfaces errors to the user (failure paths degrade
//! to last-known-good in-memory state), so structured logs are the only place
//! swallowed persistence failures and ignored commands become visible.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
