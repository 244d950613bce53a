//! Logging setup
//!
//! Installs a `tracing_subscriber` fmt subscriber. `RUST_LOG` overrides the
//! configured filter.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
