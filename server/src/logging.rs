//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,todo_server=debug,tower_http=debug";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `TODO_LOG`, then `RUST_LOG`, then `DEFAULT_FILTER`.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = std::env::var("TODO_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
