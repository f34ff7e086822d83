//! In-process geofencing.
//!
//! [`Geofence`] is a [`RegionMonitor`] that needs no platform service: feed
//! it location fixes and it reports which regions were entered.  Used by the
//! drive replay demo and by hosts without OS-level region monitoring.
//!
//! # Spatial index
//!
//! Region centres live in an R-tree (via `rstar`) keyed by `[lat, lon]`.  A
//! fix first pulls candidates within a degree-space circle wide enough to
//! cover the largest registered radius, then each candidate is confirmed
//! with the haversine distance.
//!
//! # Entry semantics
//!
//! Entries are edge-triggered: a region fires on the first fix inside it and
//! not again until a fix has been outside it.  A region registered while the
//! device is already inside it fires on the next fix.
//!
//! The geofence knows nothing about step order.  Under
//! `MonitoringPolicy::AllSteps` every region is live at once, so a fix can
//! enter a later step's region before the current step is passed.  The
//! tracker ignores that entry, and because the region is now marked as
//! occupied it does not fire again until the device leaves and re-enters
//! it.  Routes whose regions overlap out of order can therefore stall until
//! the next re-entry; `MonitoringPolicy::NextStepOnly` avoids this by
//! registering a step's region only once it becomes current.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use tbt_core::Coordinate;

use crate::{ProximityRegion, RegionMonitor};

/// Widening applied to the degree-space pre-filter so haversine rounding at
/// the boundary never drops a true hit.
const PREFILTER_SLACK: f64 = 1.05;

// ── R-tree region entry ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
struct RegionEntry {
    point: [f64; 2], // [lat, lon]
    id:    String,
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for RegionEntry {
    /// Squared Euclidean distance in lat/lon space; only used as a
    /// pre-filter.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Geofence ──────────────────────────────────────────────────────────────────

struct Registered {
    region: ProximityRegion,
    seq:    u64,
}

/// Location-driven [`RegionMonitor`].
#[derive(Default)]
pub struct Geofence {
    index:        RTree<RegionEntry>,
    regions:      FxHashMap<String, Registered>,
    inside:       FxHashSet<String>,
    max_radius_m: f64,
    next_seq:     u64,
}

impl Geofence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_monitoring(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: &str) -> Option<&ProximityRegion> {
        self.regions.get(id).map(|r| &r.region)
    }

    /// Monitored ids in registration order.
    pub fn monitored_ids(&self) -> Vec<&str> {
        let mut regs: Vec<&Registered> = self.regions.values().collect();
        regs.sort_unstable_by_key(|r| r.seq);
        regs.into_iter().map(|r| r.region.id.as_str()).collect()
    }

    /// Evaluate a fix and return the ids of newly entered regions in
    /// registration order.
    pub fn evaluate(&mut self, at: Coordinate) -> Vec<String> {
        if self.regions.is_empty() {
            self.inside.clear();
            return Vec::new();
        }

        let span = at.degree_span(self.max_radius_m) * PREFILTER_SLACK;
        let now_inside: FxHashSet<String> = self
            .index
            .locate_within_distance([at.lat, at.lon], span * span)
            .filter(|e| {
                self.regions
                    .get(&e.id)
                    .is_some_and(|r| r.region.contains(at))
            })
            .map(|e| e.id.clone())
            .collect();

        let mut entered: Vec<(u64, String)> = now_inside
            .iter()
            .filter(|id| !self.inside.contains(*id))
            .filter_map(|id| self.regions.get(id).map(|r| (r.seq, id.clone())))
            .collect();
        entered.sort_unstable_by_key(|(seq, _)| *seq);

        self.inside = now_inside;
        trace!(%at, entered = entered.len(), inside = self.inside.len(), "geofence fix evaluated");
        entered.into_iter().map(|(_, id)| id).collect()
    }

    fn remove_entry(&mut self, id: &str) -> Option<ProximityRegion> {
        let reg = self.regions.remove(id)?;
        self.index.remove(&RegionEntry {
            point: [reg.region.center.lat, reg.region.center.lon],
            id:    reg.region.id.clone(),
        });
        self.inside.remove(id);
        if self.regions.is_empty() {
            self.max_radius_m = 0.0;
        }
        Some(reg.region)
    }
}

impl RegionMonitor for Geofence {
    fn start_monitoring(&mut self, region: &ProximityRegion) {
        self.remove_entry(&region.id);
        self.index.insert(RegionEntry {
            point: [region.center.lat, region.center.lon],
            id:    region.id.clone(),
        });
        self.max_radius_m = self.max_radius_m.max(region.radius_m);
        self.regions.insert(region.id.clone(), Registered { region: region.clone(), seq: self.next_seq });
        self.next_seq += 1;
    }

    fn stop_monitoring(&mut self, id: &str) {
        self.remove_entry(id);
    }

    fn on_location(&mut self, at: Coordinate) -> Vec<String> {
        self.evaluate(at)
    }
}
