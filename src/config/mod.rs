//! Configuration management module
//!
//! Handles loading configuration from multiple sources with proper precedence:
//! CLI arguments > environment variables > TOML files > defaults

use crate::address::Address;
use crate::error::ConfigError;
use crate::network::Network;
use crate::routing::rules::RouteRuleBuilder;
use crate::routing::{Route, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod cli;
pub mod env;
pub mod toml;

use self::cli::CliArgs;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub routes: Vec<RouteConfig>,
}

/// Static route as written in configuration.
///
/// The metric is kept signed so that a negative value in a file is reported
/// as an invalid route instead of a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub destination: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Address>,
    pub interface: String,
    #[serde(default)]
    pub metric: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            routes: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Convert every configured route, failing on the first invalid one.
    pub fn validated_routes(&self) -> Result<Vec<Route>, ConfigError> {
        let builder = RouteRuleBuilder::new();
        self.routes
            .iter()
            .map(|rc| {
                builder
                    .build(rc.destination, rc.gateway, &rc.interface, rc.metric)
                    .map_err(|e| ConfigError::ValidationError(e.to_string()))
            })
            .collect()
    }

    /// Build a route table from the configured routes.
    pub fn build_router(&self) -> Result<Router, ConfigError> {
        let routes = self.validated_routes()?;
        debug!(count = routes.len(), "building router from configuration");
        Ok(Router::with_routes(routes))
    }
}

/// Load configuration from all sources in precedence order.
pub fn load_configuration(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(ref path) = cli.config {
        let file_config = toml::load_toml_config(path)?;
        config = toml::apply_toml_config(config, file_config);
    }

    let config = env::apply_env_config(config)?;
    cli.apply_to_config(config)
}

/// Serialises tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
