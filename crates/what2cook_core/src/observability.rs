//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug` when
/// `verbose` is set. Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(default_level, "Tracing initialized");
    }
}
