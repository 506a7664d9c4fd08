//! In-memory route table with longest-prefix-match resolution

use crate::address::Address;
use crate::error::RouteError;
use crate::routing::{Route, RouteManager};
use tracing::{debug, trace};

/// Route table.
///
/// Entries are unique and kept in insertion order. Order carries no meaning
/// for resolution except as the final tie-break: among routes equal on both
/// prefix length and metric, the earliest inserted wins.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from an initial set of routes, dropping duplicates.
    pub fn with_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let mut router = Self::new();
        for route in routes {
            router.add_route(route);
        }
        router
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteManager for Router {
    fn add_route(&mut self, route: Route) {
        if self.routes.contains(&route) {
            debug!(%route, "route already present");
            return;
        }
        debug!(%route, "adding route");
        self.routes.push(route);
    }

    fn remove_route(&mut self, route: &Route) -> Result<(), RouteError> {
        let index = self
            .routes
            .iter()
            .position(|r| r == route)
            .ok_or_else(|| RouteError::RouteNotFound(route.to_string()))?;

        debug!(%route, "removing route");
        self.routes.remove(index);
        Ok(())
    }

    fn list_routes(&self) -> &[Route] {
        self.routes()
    }

    fn route_for_address(&self, address: Address) -> Option<&Route> {
        let candidates: Vec<&Route> = self
            .routes
            .iter()
            .filter(|route| route.matches(address))
            .collect();
        trace!(%address, candidates = candidates.len(), "matched routes");

        let longest = candidates
            .iter()
            .map(|route| route.network().prefix_len())
            .max()?;

        // min_by_key keeps the first of equal minima, i.e. the earliest inserted
        let best = candidates
            .into_iter()
            .filter(|route| route.network().prefix_len() == longest)
            .min_by_key(|route| route.metric());

        match best {
            Some(route) => debug!(%address, %route, "resolved route"),
            None => debug!(%address, "no route"),
        }
        best
    }
}
