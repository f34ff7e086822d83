//! Serialized, clonable handle to a session.

use std::sync::Arc;

use parking_lot::Mutex;

use tbt_core::Coordinate;
use tbt_route::{Destination, RoutePlanner};
use tbt_tracker::{AnnouncementEvent, RegionMonitor};

use crate::{NavigationSession, SessionResult, SpeechSink};

/// A [`NavigationSession`] behind a single lock.
///
/// Clones share the same session.  Each call holds the lock for its whole
/// duration, so region callbacks arriving on a platform thread are never
/// interleaved with a direction request or cancel from the UI thread.
pub struct SharedSession<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> {
    inner: Arc<Mutex<NavigationSession<P, M, S>>>,
}

impl<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> Clone for SharedSession<P, M, S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> SharedSession<P, M, S> {
    pub fn new(session: NavigationSession<P, M, S>) -> Self {
        Self { inner: Arc::new(Mutex::new(session)) }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut NavigationSession<P, M, S>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn on_location(&self, at: Coordinate) -> Vec<AnnouncementEvent> {
        self.inner.lock().on_location(at)
    }

    pub fn on_region_entered(&self, region_id: &str) -> Option<AnnouncementEvent> {
        self.inner.lock().on_region_entered(region_id)
    }

    pub fn begin_search(&self) {
        self.inner.lock().begin_search();
    }

    pub fn request_directions(&self, destination: Destination) -> SessionResult<AnnouncementEvent> {
        self.inner.lock().request_directions(destination)
    }

    pub fn cancel(&self) {
        self.inner.lock().cancel();
    }

    /// Unwrap the session if this is the last handle; otherwise give the
    /// handle back.
    pub fn try_into_inner(self) -> Result<NavigationSession<P, M, S>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}
