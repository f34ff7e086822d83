//! The turn tracker state machine.

use tracing::{debug, info, trace};

use tbt_core::{Coordinate, MonitoringPolicy, StepIndex, TrackerConfig};
use tbt_route::{Route, RouteStep};

use crate::{
    AnnouncementEvent, Cue, ProximityRegion, RegionMonitor, RegionTable, TrackerError,
    TrackerResult, TrackerState,
};

/// Follows a route step by step, advancing whenever the current step's
/// proximity region is entered.
///
/// # Type parameter
///
/// `M` is the location-monitoring collaborator that receives region
/// registrations (e.g. [`Geofence`][crate::Geofence], or an adapter around
/// the platform's region monitoring).
///
/// # Invariants
///
/// - `route` is `Some` exactly when `state` is `Tracking`.
/// - `regions` holds exactly the ids registered with `monitor`.
/// - Under [`MonitoringPolicy::AllSteps`] the registered ids are those of the
///   current step and every step after it; under
///   [`MonitoringPolicy::NextStepOnly`] only the current step's.
pub struct TurnTracker<M: RegionMonitor> {
    monitor:       M,
    policy:        MonitoringPolicy,
    route:         Option<Route>,
    state:         TrackerState,
    regions:       RegionTable,
    last_location: Option<Coordinate>,
}

impl<M: RegionMonitor> TurnTracker<M> {
    /// Create an inactive tracker using the policy from `config`.
    pub fn new(monitor: M, config: &TrackerConfig) -> Self {
        Self::with_policy(monitor, config.policy)
    }

    pub fn with_policy(monitor: M, policy: MonitoringPolicy) -> Self {
        Self {
            monitor,
            policy,
            route:         None,
            state:         TrackerState::Inactive,
            regions:       RegionTable::new(),
            last_location: None,
        }
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Replace any existing route and start tracking `route` from step 0.
    ///
    /// Every previously registered region is unregistered before the new
    /// ones are registered.  Returns the initial announcement.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidRoute`] if `route` has no steps.  The tracker
    /// is left exactly as it was.
    pub fn set_route(&mut self, route: Route) -> TrackerResult<AnnouncementEvent> {
        if route.is_empty() {
            debug!("rejected route with no steps");
            return Err(TrackerError::InvalidRoute);
        }

        self.release_regions();

        match self.policy {
            MonitoringPolicy::AllSteps => {
                for step in route.steps() {
                    self.register(step);
                }
            }
            MonitoringPolicy::NextStepOnly => self.register(&route.steps()[0]),
        }

        let steps = route.steps();
        let event = AnnouncementEvent::Initial {
            first: Cue::from_step(&steps[0]),
            then:  steps.get(1).map(Cue::from_step),
        };

        info!(
            steps      = route.len(),
            distance_m = route.total_distance_m(),
            policy     = ?self.policy,
            "tracking new route"
        );
        self.route = Some(route);
        self.state = TrackerState::Tracking { current: StepIndex::FIRST };
        Ok(event)
    }

    /// Handle entry into the region identified by `region_id`.
    ///
    /// Returns the announcement for the new current step, `Arrived` when the
    /// last step was reached, or `None` if the event does not belong to the
    /// current step (unknown, stale or early ids).
    pub fn on_region_entered(&mut self, region_id: &str) -> Option<AnnouncementEvent> {
        let TrackerState::Tracking { current } = self.state else {
            trace!(region_id, "region entered while inactive; ignored");
            return None;
        };
        let Some(step) = self.regions.lookup(region_id) else {
            trace!(region_id, "region not registered by tracker; ignored");
            return None;
        };
        if step != current {
            debug!(region_id, %current, "region is not the current step; ignored");
            return None;
        }

        self.unregister(region_id);
        let next = current.next();

        let next_step = self
            .route
            .as_ref()
            .and_then(|r| r.step(next))
            .cloned();

        match next_step {
            Some(step) => {
                if self.policy == MonitoringPolicy::NextStepOnly {
                    self.register(&step);
                }
                self.state = TrackerState::Tracking { current: next };
                debug!(step = %next, instruction = %step.instruction, "advanced to next step");
                Some(AnnouncementEvent::Step(Cue::from_step(&step)))
            }
            None => {
                let route = self.route.take()?;
                self.release_regions();
                self.state = TrackerState::Inactive;

                let last = route.steps().last()?;
                info!(steps = route.len(), "arrived at destination");
                Some(AnnouncementEvent::Arrived {
                    step:        last.index,
                    instruction: last.instruction.clone(),
                    destination: route.destination_name.clone(),
                })
            }
        }
    }

    /// Feed a location fix.
    ///
    /// The fix is remembered as [`last_location`](Self::last_location) and
    /// passed to the monitor; any regions it reports as entered are handled
    /// in order, exactly as if they had arrived through
    /// [`on_region_entered`](Self::on_region_entered).
    pub fn on_location(&mut self, at: Coordinate) -> Vec<AnnouncementEvent> {
        self.last_location = Some(at);
        let entered = self.monitor.on_location(at);
        entered
            .iter()
            .filter_map(|id| self.on_region_entered(id))
            .collect()
    }

    /// Unregister every region and return to `Inactive`.  Idempotent.
    pub fn clear(&mut self) {
        if self.state.is_active() {
            debug!("tracking cleared");
        }
        self.release_regions();
        self.route = None;
        self.state = TrackerState::Inactive;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The step the tracker is waiting to reach, or `None` when inactive.
    pub fn current_step(&self) -> Option<&RouteStep> {
        let current = self.state.current()?;
        self.route.as_ref()?.step(current)
    }

    #[inline]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn policy(&self) -> MonitoringPolicy {
        self.policy
    }

    /// Ids currently registered with the monitor, in step order.
    pub fn monitored_region_ids(&self) -> Vec<&str> {
        self.regions.ids()
    }

    pub fn last_location(&self) -> Option<Coordinate> {
        self.last_location
    }

    /// Great-circle distance from `at` to the current step's anchor.
    pub fn distance_to_current(&self, at: Coordinate) -> Option<f64> {
        self.current_step().map(|s| s.anchor.distance_m(at))
    }

    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    /// Mutable access to the monitor.  Registrations made directly through
    /// this handle are invisible to the tracker.
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    /// Consume the tracker, returning its monitor.
    pub fn into_monitor(self) -> M {
        self.monitor
    }

    // ── Region bookkeeping ────────────────────────────────────────────────

    fn register(&mut self, step: &RouteStep) {
        let region = ProximityRegion::for_step(step);
        trace!(id = %region.id, center = %region.center, radius_m = region.radius_m, "start monitoring");
        self.monitor.start_monitoring(&region);
        self.regions.insert(region.id, step.index);
    }

    fn unregister(&mut self, id: &str) {
        trace!(id, "stop monitoring");
        self.monitor.stop_monitoring(id);
        self.regions.remove(id);
    }

    fn release_regions(&mut self) {
        for id in self.regions.drain() {
            trace!(id = %id, "stop monitoring");
            self.monitor.stop_monitoring(&id);
        }
    }
}
