//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Default filter directive for the given verbosity flags.
fn default_level(debug: bool, verbose: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

/// `RUST_LOG` wins when set; otherwise the flags choose the level.
fn build_env_filter(debug: bool, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug, verbose)))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(debug: bool, verbose: bool, ansi: bool) {
    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(debug)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(build_env_filter(debug, verbose))
        .with(layer);

    let _ = tracing::subscriber::set_global_default(subscriber);
}
