//! `tracing` subscriber for the binary.
//!
//! Events go to stderr so stdout stays reserved for the outcome.
//! `RUST_LOG` wins over the configured directive.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ConfigError;

/// Builds the filter: `RUST_LOG` when set and valid, else `directive`.
///
/// # Errors
///
/// Returns [`ConfigError::Filter`] if `directive` cannot be parsed.
pub fn filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|e| ConfigError::Filter {
        directive: directive.to_owned(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber.
///
/// If a global subscriber is already set, it stays in place and the
/// conflict is reported to it at debug level.
///
/// # Errors
///
/// Returns [`ConfigError::Filter`] if `directive` cannot be parsed.
pub fn init(directive: &str) -> Result<(), ConfigError> {
    let filter = filter(directive)?;
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    if let Err(error) = installed {
        tracing::debug!(%error, "global subscriber already set, keeping it");
    }
    Ok(())
}

/// Filter directive implied by repeated `-v` flags, if any.
#[must_use]
pub const fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}
