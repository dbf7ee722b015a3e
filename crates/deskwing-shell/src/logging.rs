//! Logging setup for shell binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
///
/// Panics if a global subscriber is already set; tests should use
/// [`try_init`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Like [`init`], but quietly does nothing when a subscriber is already
/// installed. Safe to call from every test.
pub fn try_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
