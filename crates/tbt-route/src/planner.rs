//! Route planner trait and the built-in planners.
//!
//! # Pluggability
//!
//! The session requests directions through the [`RoutePlanner`] trait, so a
//! host application plugs in its platform routing service (or a remote
//! routing API) without touching the tracker.  Two planners ship with the
//! crate:
//!
//! - [`StaticPlanner`] replays a fixed route, whatever the request.  Used for
//!   recorded drives and tests.
//! - [`DirectPlanner`] heads straight for the destination: a departure step
//!   at the origin and an arrival step at the destination.

use tbt_core::{Coordinate, TrackerConfig};

use crate::{Route, RouteBuilder, RouteError, RouteResult};

// ── Destination ───────────────────────────────────────────────────────────────

/// A place picked from search results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub name:       String,
    pub coordinate: Coordinate,
}

impl Destination {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self { name: name.into(), coordinate }
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable routing collaborator.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a session can be moved behind a
/// shared handle and driven from a platform callback thread.
pub trait RoutePlanner: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// Planners that build their own steps take the transport mode and the
    /// default proximity radius from `config`.  An `Ok` route may be empty;
    /// the tracker rejects it on assignment.
    fn plan(
        &self,
        from:   Coordinate,
        to:     &Destination,
        config: &TrackerConfig,
    ) -> RouteResult<Route>;
}

// ── StaticPlanner ─────────────────────────────────────────────────────────────

/// Returns a clone of the same route for every request.
///
/// The recorded route keeps its own radii and transport mode.
#[derive(Debug, Clone)]
pub struct StaticPlanner {
    route: Route,
}

impl StaticPlanner {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

impl RoutePlanner for StaticPlanner {
    fn plan(&self, _from: Coordinate, _to: &Destination, _config: &TrackerConfig) -> RouteResult<Route> {
        Ok(self.route.clone())
    }
}

// ── DirectPlanner ─────────────────────────────────────────────────────────────

/// Straight-line "as the crow flies" planner.
///
/// Produces two steps: a departure step anchored at the origin whose distance
/// is the great-circle distance to the destination, and a zero-length arrival
/// step anchored at the destination.  Both use the configured default radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPlanner;

impl RoutePlanner for DirectPlanner {
    fn plan(&self, from: Coordinate, to: &Destination, config: &TrackerConfig) -> RouteResult<Route> {
        if !from.is_valid() || !to.coordinate.is_valid() {
            return Err(RouteError::NoRoute { from, to: to.coordinate });
        }
        let distance = from.distance_m(to.coordinate);

        let mut b = RouteBuilder::with_default_radius(config.default_radius_m)
            .transport(config.transport)
            .destination_name(to.name.clone());
        b.add_step(format!("Head toward {}", to.name), distance, from)?;
        b.add_step(format!("Arrive at {}", to.name), 0.0, to.coordinate)?;
        Ok(b.build())
    }
}
