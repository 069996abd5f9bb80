//! Tracing/logging initialization.
//!
//! Rebuild runs are long batch operations, so every log line carries
//! structured fields (item ids, counts, drift values) and is emitted as JSON
//! for downstream collection.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// The filter comes from `RUST_LOG`, falling back to `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize with an explicit filter directive, ignoring `RUST_LOG`.
///
/// Used by test harnesses and one-off tooling that want a fixed verbosity.
pub fn init_with(directive: &str) {
    install(EnvFilter::new(directive));
}

fn install(filter: EnvFilter) {
    // JSON logs + timestamps; repeated installs are rejected by try_init.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
