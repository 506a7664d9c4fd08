//! TOML configuration file parsing

use crate::config::{AppConfig, RouteConfig};
use crate::error::ConfigError;
use serde::Deserialize;

/// TOML configuration structure
#[derive(Debug, Deserialize)]
pub struct TomlConfig {
    pub logging: Option<LoggingConfig>,
    pub routes: Option<Vec<RouteConfig>>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Load configuration from TOML file
pub fn load_toml_config(path: &str) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_string(),
    })?;

    ::toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
}

/// Apply values present in the file over base configuration
pub fn apply_toml_config(mut base_config: AppConfig, file: TomlConfig) -> AppConfig {
    if let Some(level) = file.logging.and_then(|l| l.level) {
        base_config.log_level = level;
    }

    if let Some(routes) = file.routes {
        base_config.routes = routes;
    }

    base_config
}
