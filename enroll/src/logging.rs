//! Diagnostic tracing for the enrollment tool.
//!
//! Output goes to stderr so it never interleaves with the console menu on
//! stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_filter` (from `enroll.toml`) if
/// unset or unparsable. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=enroll=debug cargo run -- show
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
