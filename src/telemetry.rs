//! Global `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{GatewayError, Result};

/// Install the global fmt subscriber.
///
/// A valid `RUST_LOG` takes precedence over the configured filter.
/// Fails on an invalid filter or when a global subscriber already exists.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            GatewayError::Telemetry(format!("invalid log filter '{}': {e}", config.filter))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| GatewayError::Telemetry(e.to_string()))
}
