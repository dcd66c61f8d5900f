//! Diagnostic logging
//!
//! Logs go to stderr so that stdout carries only the validation report.
//! `RUST_LOG` takes precedence over the level chosen by `-v`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ClaudexError, Result};

/// Filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "claudex=debug,warn" } else { "warn" }
}

/// Install the global subscriber
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| ClaudexError::LoggingInitFailed {
            reason: e.to_string(),
        })
}
