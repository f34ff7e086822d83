//! The `NavigationSession` struct and its event handlers.

use tracing::{debug, info, warn};

use tbt_core::{Coordinate, TrackerConfig};
use tbt_route::{Destination, RoutePlanner};
use tbt_tracker::{AnnouncementEvent, RegionMonitor, TurnTracker};

use crate::{SessionError, SessionResult, SpeechSink};

/// One navigation screen's worth of state.
///
/// `NavigationSession<P, M, S>` owns the tracker and its three
/// collaborators:
///
/// - `P: RoutePlanner` computes routes for direction requests.
/// - `M: RegionMonitor` receives proximity-region registrations.
/// - `S: SpeechSink` speaks announcements.
///
/// The last location fix is the origin of the next direction request, so a
/// host must forward at least one fix before asking for directions.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct NavigationSession<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> {
    /// The routing collaborator.
    pub planner: P,

    /// The speech output collaborator.
    pub speech: S,

    pub(crate) tracker:     TurnTracker<M>,
    pub(crate) config:      TrackerConfig,
    pub(crate) destination: Option<Destination>,
}

impl<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> NavigationSession<P, M, S> {
    // ── Host callbacks ────────────────────────────────────────────────────

    /// Forward a location fix.
    ///
    /// Returns (and speaks) any announcements caused by regions the fix
    /// entered.
    pub fn on_location(&mut self, at: Coordinate) -> Vec<AnnouncementEvent> {
        if !at.is_valid() {
            warn!(%at, "discarding invalid location fix");
            return Vec::new();
        }
        let events = self.tracker.on_location(at);
        for event in &events {
            self.say(event);
        }
        if events.iter().any(AnnouncementEvent::is_arrival) {
            self.destination = None;
        }
        events
    }

    /// Forward a platform region-entry callback.
    pub fn on_region_entered(&mut self, region_id: &str) -> Option<AnnouncementEvent> {
        let event = self.tracker.on_region_entered(region_id)?;
        self.say(&event);
        if event.is_arrival() {
            self.destination = None;
        }
        Some(event)
    }

    /// A new search began: whatever was being tracked is abandoned.
    pub fn begin_search(&mut self) {
        debug!("search started; clearing tracking");
        self.tracker.clear();
        self.destination = None;
    }

    /// Request directions from the last known location to `destination` and
    /// start tracking the result.
    ///
    /// Returns (and speaks) the initial announcement.  On error the
    /// previously tracked route, if any, is left in place.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoLocationFix`] before the first location fix.
    /// - [`SessionError::Routing`] if the planner fails.
    /// - [`SessionError::Tracker`] if the planner returned an empty route.
    pub fn request_directions(&mut self, destination: Destination) -> SessionResult<AnnouncementEvent> {
        let from = self.tracker.last_location().ok_or(SessionError::NoLocationFix)?;

        let mut route = self.planner.plan(from, &destination, &self.config)?;
        if route.destination_name.is_none() {
            route.destination_name = Some(destination.name.clone());
        }

        let event = self.tracker.set_route(route)?;
        info!(
            destination = %destination.name,
            to          = %destination.coordinate,
            transport   = %self.config.transport,
            "directions started"
        );
        self.destination = Some(destination);
        self.say(&event);
        Ok(event)
    }

    /// The user cancelled: stop tracking and silence speech.
    pub fn cancel(&mut self) {
        info!("navigation cancelled");
        self.tracker.clear();
        self.speech.stop();
        self.destination = None;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn tracker(&self) -> &TurnTracker<M> {
        &self.tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Destination of the route being tracked.
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn is_navigating(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn last_location(&self) -> Option<Coordinate> {
        self.tracker.last_location()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn say(&mut self, event: &AnnouncementEvent) {
        let text = event.text();
        debug!(step = %event.step(), text = %text, "announce");
        self.speech.speak(&text, event);
    }
}
