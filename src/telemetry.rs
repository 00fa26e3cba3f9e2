//! Structured logging set-up.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `fallback` is used, and `info`
/// if `fallback` is not a valid directive.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing(fallback: &str) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
