//! Proximity regions and the monitoring collaborator seam.

use rustc_hash::FxHashMap;

use tbt_core::{Coordinate, StepIndex};
use tbt_route::RouteStep;

// ── ProximityRegion ───────────────────────────────────────────────────────────

/// A circular region registered with the location-monitoring collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityRegion {
    pub id:       String,
    pub center:   Coordinate,
    pub radius_m: f64,
}

impl ProximityRegion {
    /// The region guarding `step`, identified by [`region_id`].
    pub fn for_step(step: &RouteStep) -> Self {
        Self {
            id:       region_id(step.index),
            center:   step.anchor,
            radius_m: step.radius_m,
        }
    }

    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.center.distance_m(at) <= self.radius_m
    }
}

/// Identifier assigned to the region of `step`: its index in decimal.
#[inline]
pub fn region_id(step: StepIndex) -> String {
    step.0.to_string()
}

// ── RegionMonitor trait ───────────────────────────────────────────────────────

/// The location-monitoring collaborator.
///
/// Platform implementations forward registrations to the OS and deliver
/// entries asynchronously through the host's callback, which calls
/// [`TurnTracker::on_region_entered`].  In-process implementations such as
/// [`Geofence`] instead report entries from
/// [`on_location`](Self::on_location).
///
/// [`TurnTracker::on_region_entered`]: crate::TurnTracker::on_region_entered
/// [`Geofence`]: crate::Geofence
pub trait RegionMonitor {
    /// Begin monitoring `region`.  Registering an id that is already
    /// monitored replaces the old region.
    fn start_monitoring(&mut self, region: &ProximityRegion);

    /// Stop monitoring the region with `id`.  Unknown ids are ignored.
    fn stop_monitoring(&mut self, id: &str);

    /// Feed a location fix; returns ids of regions entered by this fix, in
    /// registration order.
    ///
    /// Default: reports nothing (entries arrive through platform callbacks).
    fn on_location(&mut self, _at: Coordinate) -> Vec<String> {
        Vec::new()
    }
}

/// A [`RegionMonitor`] that ignores every request.
pub struct NoopMonitor;

impl RegionMonitor for NoopMonitor {
    fn start_monitoring(&mut self, _region: &ProximityRegion) {}
    fn stop_monitoring(&mut self, _id: &str) {}
}

// ── RegionTable ───────────────────────────────────────────────────────────────

/// Identifier → step mapping for the regions the tracker has registered.
///
/// Only regions that are currently registered have an entry, so a lookup
/// miss covers unknown ids and already-passed steps alike.
#[derive(Debug, Default, Clone)]
pub struct RegionTable {
    by_id: FxHashMap<String, StepIndex>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as registered for `step`.
    pub fn insert(&mut self, id: String, step: StepIndex) {
        self.by_id.insert(id, step);
    }

    #[inline]
    pub fn lookup(&self, id: &str) -> Option<StepIndex> {
        self.by_id.get(id).copied()
    }

    pub fn remove(&mut self, id: &str) -> Option<StepIndex> {
        self.by_id.remove(id)
    }

    /// Remove every entry, returning the ids in step order.
    pub fn drain(&mut self) -> Vec<String> {
        let mut entries: Vec<(String, StepIndex)> = self.by_id.drain().collect();
        entries.sort_unstable_by_key(|(_, step)| *step);
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Registered ids in step order.
    pub fn ids(&self) -> Vec<&str> {
        let mut entries: Vec<(&str, StepIndex)> =
            self.by_id.iter().map(|(id, step)| (id.as_str(), *step)).collect();
        entries.sort_unstable_by_key(|(_, step)| *step);
        entries.into_iter().map(|(id, _)| id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
