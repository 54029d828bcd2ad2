//! Error types for the gateway error layer itself.
//!
//! These cover configuration and telemetry setup only. Normalizing an
//! upstream failure never fails; see [`crate::normalize`].

use thiserror::Error;

/// Primary error type for gateway setup operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl GatewayError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GatewayError>;
