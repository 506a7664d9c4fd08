//! Route construction from loosely typed input
//!
//! Configuration files, environment variables and command-line flags carry
//! routes as text and signed integers. These helpers validate that input and
//! turn it into [`Route`] values.

use crate::address::Address;
use crate::error::RouteError;
use crate::network::Network;
use crate::routing::Route;

/// Route rule builder
pub struct RouteRuleBuilder;

impl RouteRuleBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a route from parsed parts, validating the signed metric.
    pub fn build(
        &self,
        destination: Network,
        gateway: Option<Address>,
        interface: &str,
        metric: i64,
    ) -> Result<Route, RouteError> {
        let metric = u32::try_from(metric).map_err(|_| {
            RouteError::InvalidRoute(format!(
                "metric {} for {} must be between 0 and {}",
                metric,
                destination,
                u32::MAX
            ))
        })?;

        Route::new(destination, gateway, interface.trim(), metric)
    }

    /// Build a route from text: CIDR destination, optional dotted gateway.
    ///
    /// An empty gateway string is treated as no gateway.
    pub fn build_from_text(
        &self,
        destination: &str,
        gateway: Option<&str>,
        interface: &str,
        metric: i64,
    ) -> Result<Route, RouteError> {
        let destination: Network = destination.trim().parse()?;
        let gateway = match gateway.map(str::trim) {
            Some(text) if !text.is_empty() => Some(Address::parse(text)?),
            _ => None,
        };

        self.build(destination, gateway, interface, metric)
    }
}

impl Default for RouteRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
