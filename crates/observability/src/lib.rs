//! Tracing/logging setup shared by every entry point.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with the `RUST_LOG` filter (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(None);
}

/// Like [`init`], but an explicit filter directive takes precedence over `RUST_LOG`.
pub fn init_with_filter(directive: Option<&str>) {
    tracing::init(directive);
}
