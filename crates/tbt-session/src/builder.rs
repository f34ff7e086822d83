//! Fluent builder for constructing a [`NavigationSession`].

use tbt_core::TrackerConfig;
use tbt_route::RoutePlanner;
use tbt_tracker::{RegionMonitor, TurnTracker};

use crate::{NavigationSession, SessionResult, SpeechSink};

/// Fluent builder for [`NavigationSession<P, M, S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                     |
/// |---------------|-----------------------------|
/// | `.config(c)`  | `TrackerConfig::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new(DirectPlanner, Geofence::new(), NoopSpeech)
///     .config(config)
///     .build()?;
/// ```
pub struct SessionBuilder<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> {
    planner: P,
    monitor: M,
    speech:  S,
    config:  Option<TrackerConfig>,
}

impl<P: RoutePlanner, M: RegionMonitor, S: SpeechSink> SessionBuilder<P, M, S> {
    pub fn new(planner: P, monitor: M, speech: S) -> Self {
        Self { planner, monitor, speech, config: None }
    }

    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration and construct the session.
    ///
    /// # Errors
    ///
    /// [`SessionError::Config`][crate::SessionError::Config] if the
    /// configuration fails [`TrackerConfig::validate`].
    pub fn build(self) -> SessionResult<NavigationSession<P, M, S>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(NavigationSession {
            planner:     self.planner,
            speech:      self.speech,
            tracker:     TurnTracker::new(self.monitor, &config),
            config,
            destination: None,
        })
    }
}
