//! Configuration system (layered: file > `.env` > environment).

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{GatewayError, Result};

pub const LOG_FILTER_ENV: &str = "GATEWAY_LOG_FILTER";
pub const LOG_FORMAT_ENV: &str = "GATEWAY_LOG_FORMAT";
pub const EXPOSE_ERROR_CAUSE_ENV: &str = "GATEWAY_EXPOSE_ERROR_CAUSE";

/// Service configuration read by the error layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub logging: LoggingConfig,
    pub errors: ErrorReportingConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `llm_gateway_errors=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// How normalized errors are reported to API callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErrorReportingConfig {
    /// Include the diagnostic cause in error response bodies. Off by default;
    /// causes may carry backend details that callers should not see.
    pub expose_cause: bool,
}

impl ServiceConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load the config file (if any), then apply `.env` and environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `GATEWAY_*` environment variables.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(filter) = std::env::var(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }
        if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
            self.logging.format = LogFormat::from_str(format.trim()).map_err(|_| {
                GatewayError::configuration(format!(
                    "{LOG_FORMAT_ENV} must be 'plain' or 'json', got '{format}'"
                ))
            })?;
        }
        if let Ok(expose) = std::env::var(EXPOSE_ERROR_CAUSE_ENV) {
            self.errors.expose_cause = parse_bool(&expose).ok_or_else(|| {
                GatewayError::configuration(format!(
                    "{EXPOSE_ERROR_CAUSE_ENV} must be a boolean, got '{expose}'"
                ))
            })?;
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
