//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{LogFormat, RunMode, ServiceConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the run mode (`dev`, `production`, `test`).
pub const MODE_ENV: &str = "APP_ENV";
/// Environment variable overriding `listener.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "APP_BIND_ADDRESS";
/// Environment variable overriding `observability.log_level`.
pub const LOG_LEVEL_ENV: &str = "APP_LOG_LEVEL";
/// Environment variable overriding `observability.log_format`.
pub const LOG_FORMAT_ENV: &str = "APP_LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[source] toml::de::Error),
    #[error("Validation failed: {}", join_problems(.0))]
    Validation(Vec<ValidationError>),
}

fn join_problems(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after parsing, before validation.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl ServiceConfig {
    /// Defaults plus environment overrides, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_overrides(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

fn apply_env_overrides(config: &mut ServiceConfig) {
    if let Ok(mode) = std::env::var(MODE_ENV) {
        config.mode = RunMode::from_env_value(&mode);
    }
    if let Ok(addr) = std::env::var(BIND_ADDRESS_ENV) {
        config.listener.bind_address = addr;
    }
    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        config.observability.log_level = level;
    }
    if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
        config.observability.log_format = match format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
    }
}
