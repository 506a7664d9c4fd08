//! IPv4 Router - addressing, CIDR subnetting and route resolution
//!
//! This library models IPv4 addresses and CIDR networks and provides an
//! in-memory route table that resolves a destination address to its best
//! route using longest-prefix match with metric tie-breaking.

pub mod address;
pub mod config;
pub mod error;
pub mod network;
pub mod routing;

pub use address::Address;
pub use error::{AddressError, AppError, ConfigError, NetworkError, RouteError};
pub use network::Network;
pub use routing::{Route, RouteManager, Router};
