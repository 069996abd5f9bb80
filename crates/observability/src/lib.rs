//! `makerstock-observability` — shared tracing/logging setup.

/// Tracing configuration (filters, JSON formatting).
pub mod tracing;

/// Initialize process-wide observability with the default environment filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with an explicit filter directive.
pub fn init_with(directive: &str) {
    tracing::init_with(directive);
}
