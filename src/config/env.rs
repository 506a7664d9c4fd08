//! Environment variable configuration handling

use crate::address::Address;
use crate::config::{AppConfig, RouteConfig};
use crate::error::ConfigError;
use crate::network::Network;
use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "IPV4_ROUTER_";

/// Apply environment variable configuration over base configuration
pub fn apply_env_config(mut base_config: AppConfig) -> Result<AppConfig, ConfigError> {
    if let Ok(level) = env::var(format!("{}LOG_LEVEL", ENV_PREFIX)) {
        base_config.log_level = level;
    }

    // Format: IPV4_ROUTER_ROUTES="dest:gateway:interface:metric,..."
    if let Ok(routes_str) = env::var(format!("{}ROUTES", ENV_PREFIX)) {
        base_config.routes = parse_routes(&routes_str)?;
    }

    Ok(base_config)
}

/// Parse a route list string
/// Format: "dest1:gateway1:iface1:metric1,dest2::iface2:metric2"
/// Examples:
/// - "0.0.0.0/0:192.168.0.1:en0:10" (default route via a gateway)
/// - "10.123.0.0/20::en1:100" (directly connected, no gateway)
/// - "10.123.1.0/24::en2" (metric omitted, defaults to 0)
pub fn parse_routes(routes_str: &str) -> Result<Vec<RouteConfig>, ConfigError> {
    if routes_str.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut routes = Vec::new();

    for route_str in routes_str.split(',') {
        let route_str = route_str.trim();
        if route_str.is_empty() {
            continue;
        }

        let parts: Vec<&str> = route_str.split(':').map(str::trim).collect();
        if parts.len() < 3 || parts.len() > 4 {
            return Err(ConfigError::InvalidFormat(format!(
                "Invalid route format: '{}'. Expected format: 'destination:[gateway]:interface[:metric]'",
                route_str
            )));
        }

        let destination = parts[0].parse::<Network>().map_err(|e| {
            ConfigError::InvalidFormat(format!("Invalid destination in route '{}': {}", route_str, e))
        })?;

        let gateway = if parts[1].is_empty() {
            None
        } else {
            Some(parts[1].parse::<Address>().map_err(|e| {
                ConfigError::InvalidFormat(format!("Invalid gateway in route '{}': {}", route_str, e))
            })?)
        };

        let metric = match parts.get(3) {
            Some(metric) if !metric.is_empty() => metric.parse::<i64>().map_err(|_| {
                ConfigError::InvalidFormat(format!("Invalid metric: '{}'", metric))
            })?,
            _ => 0,
        };

        routes.push(RouteConfig {
            destination,
            gateway,
            interface: parts[2].to_string(),
            metric,
        });
    }

    Ok(routes)
}
