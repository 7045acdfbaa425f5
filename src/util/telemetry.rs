//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Install a default subscriber filtered by `RUST_LOG`, unless the host
/// application already installed one.
pub fn init_tracing() {
    install(EnvFilter::from_default_env());
}

/// Install a default subscriber with an explicit directive such as
/// `lending_library=debug`. An unparsable directive falls back to `RUST_LOG`.
pub fn init_tracing_with(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::from_default_env());
    install(filter);
}

fn install(filter: EnvFilter) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
