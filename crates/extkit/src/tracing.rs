//! Logging setup for binaries and tests that embed extkit.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Initialize tracing with the default `info` filter.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format suitable for terminal output
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` still takes precedence when set. Calling this more than once
/// leaves the first subscriber in place.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Initialize tracing with the configured `log_filter` as the default.
///
/// Equivalent to `init_with_filter(&config.log_filter)`; `RUST_LOG` still
/// wins when it is set.
pub fn init_from_config(config: &Config) {
    init_with_filter(&config.log_filter);
}
