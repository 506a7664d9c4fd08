//! Centralized error types and handling

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Route management error: {0}")]
    Route(#[from] RouteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// IPv4 address construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Malformed IPv4 address: '{0}'")]
    Malformed(String),

    #[error("Value {0} is outside the IPv4 address range")]
    OutOfRange(i64),
}

/// CIDR network construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Invalid prefix length: {0} (expected 0-32)")]
    InvalidPrefixLength(i64),

    #[error("Malformed CIDR network: '{0}'")]
    Malformed(String),

    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Route construction and route table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
