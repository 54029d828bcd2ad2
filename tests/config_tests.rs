//! Tests for configuration system.

use std::sync::{Mutex, OnceLock};

use pretty_assertions::assert_eq;

use llm_gateway_errors::config::{
    ErrorReportingConfig, LogFormat, LoggingConfig, ServiceConfig, EXPOSE_ERROR_CAUSE_ENV,
    LOG_FILTER_ENV, LOG_FORMAT_ENV,
};
use llm_gateway_errors::error::GatewayError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 3] = [LOG_FILTER_ENV, LOG_FORMAT_ENV, EXPOSE_ERROR_CAUSE_ENV];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clean_env() -> (std::sync::MutexGuard<'static, ()>, EnvGuard) {
    let lock = env_lock_guard();
    let guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    (lock, guard)
}

#[test]
fn defaults_hide_cause_and_log_plain_info() {
    let config = ServiceConfig::default();

    assert_eq!(
        config,
        ServiceConfig {
            logging: LoggingConfig {
                filter: "info".to_string(),
                format: LogFormat::Plain,
            },
            errors: ErrorReportingConfig {
                expose_cause: false
            },
        }
    );
}

#[test]
fn toml_sections_are_optional() {
    let config = ServiceConfig::from_toml_str("[errors]\nexpose_cause = true\n").unwrap();

    assert!(config.errors.expose_cause);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn toml_full_config_parses() {
    let raw = r#"
[logging]
filter = "llm_gateway_errors=debug"
format = "json"

[errors]
expose_cause = false
"#;
    let config = ServiceConfig::from_toml_str(raw).unwrap();

    assert_eq!(config.logging.filter, "llm_gateway_errors=debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(!config.errors.expose_cause);
}

#[test]
fn unknown_toml_keys_are_rejected() {
    let err = ServiceConfig::from_toml_str("[errors]\nshow_cause = true\n").unwrap_err();

    assert!(matches!(err, GatewayError::Toml(_)));
}

#[test]
fn from_file_reads_toml() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("gateway.toml");
    std::fs::write(&path, "[logging]\nformat = \"json\"\n").unwrap();

    let config = ServiceConfig::from_file(&path).unwrap();

    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let err = ServiceConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, GatewayError::Io(_)));
}

#[test]
fn env_overrides_file_values() {
    let (_lock, _guard) = clean_env();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("gateway.toml");
    std::fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();

    std::env::set_var(LOG_FILTER_ENV, "debug");
    std::env::set_var(LOG_FORMAT_ENV, "JSON");
    std::env::set_var(EXPOSE_ERROR_CAUSE_ENV, "yes");

    let config = ServiceConfig::load(Some(&path)).unwrap();

    assert_eq!(config.logging.filter, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.errors.expose_cause);
}

#[test]
fn invalid_env_values_are_configuration_errors() {
    let (_lock, _guard) = clean_env();

    std::env::set_var(EXPOSE_ERROR_CAUSE_ENV, "maybe");
    let err = ServiceConfig::default().apply_env().unwrap_err();
    assert!(matches!(err, GatewayError::Configuration(_)));
    std::env::remove_var(EXPOSE_ERROR_CAUSE_ENV);

    std::env::set_var(LOG_FORMAT_ENV, "xml");
    let err = ServiceConfig::default().apply_env().unwrap_err();
    assert!(
        err.to_string().contains(LOG_FORMAT_ENV),
        "unexpected error: {err}"
    );
}

#[test]
fn apply_env_without_vars_keeps_config() {
    let (_lock, _guard) = clean_env();
    let mut config = ServiceConfig::from_toml_str("[logging]\nfilter = \"trace\"\n").unwrap();

    config.apply_env().unwrap();

    assert_eq!(config.logging.filter, "trace");
}
