//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Builds the log filter. `RUST_LOG` wins when set, otherwise `verbose`
/// selects between `debug` and `warn`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    })
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the report.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}
