//! Diagnostics for the `linkerd` binary.
//!
//! Logs go to stderr so that stdout carries nothing but the generated YAML.

use tracing_subscriber::EnvFilter;

use crate::config::DocConfig;
use crate::error::DocError;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Calling this again once a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns [`DocError::Logging`] when the filter directive is invalid.
pub fn init_logging(config: &DocConfig) -> Result<(), DocError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|err| DocError::Logging(format!("invalid filter '{}': {err}", config.log_filter)))?;
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
