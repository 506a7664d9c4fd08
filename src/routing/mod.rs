//! Routing table module
//!
//! Route entries and the table abstraction used to resolve a destination
//! address to its best route.

use crate::address::Address;
use crate::error::RouteError;
use crate::network::Network;
use std::fmt;

pub mod router;
pub mod rules;

pub use router::Router;

/// Route entry.
///
/// A missing gateway means the destination is directly connected on
/// `interface`; it is not the same thing as a `0.0.0.0` gateway.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Route {
    network: Network,
    gateway: Option<Address>,
    interface: String,
    metric: u32,
}

impl Route {
    /// Create a route, rejecting an empty interface name. Surrounding
    /// whitespace is stripped from the stored name.
    pub fn new(
        network: Network,
        gateway: Option<Address>,
        interface: impl Into<String>,
        metric: u32,
    ) -> Result<Self, RouteError> {
        let interface = interface.into().trim().to_string();
        if interface.is_empty() {
            return Err(RouteError::InvalidRoute(format!(
                "route to {} has an empty interface name",
                network
            )));
        }

        Ok(Self {
            network,
            gateway,
            interface,
            metric,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn gateway(&self) -> Option<Address> {
        self.gateway
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn metric(&self) -> u32 {
        self.metric
    }

    /// True when the route has no next hop.
    pub fn is_directly_connected(&self) -> bool {
        self.gateway.is_none()
    }

    /// Whether `address` is covered by this route's destination network.
    pub fn matches(&self, address: Address) -> bool {
        self.network.contains(address)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net: {}", self.network)?;
        if let Some(gateway) = self.gateway {
            write!(f, ", gateway: {}", gateway)?;
        }
        write!(f, ", interface: {}, metric: {}", self.interface, self.metric)
    }
}

/// Route table trait
pub trait RouteManager {
    /// Insert `route`; inserting an equal route again changes nothing.
    fn add_route(&mut self, route: Route);
    /// Remove an equal route, failing with [`RouteError::RouteNotFound`] if absent.
    fn remove_route(&mut self, route: &Route) -> Result<(), RouteError>;
    fn list_routes(&self) -> &[Route];
    /// Best route for `address`, or `None` when nothing matches.
    fn route_for_address(&self, address: Address) -> Option<&Route>;
}
