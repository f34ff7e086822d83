//! Tracker progress state.

use tbt_core::StepIndex;

/// Where the tracker is along the active route.
///
/// `current` is always a valid index into the tracked route's steps; once
/// the last step is passed the tracker drops back to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    /// No route assigned, or the previous one was finished or cleared.
    #[default]
    Inactive,
    /// Following a route; `current` is the next step to be reached.
    Tracking { current: StepIndex },
}

impl TrackerState {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, TrackerState::Tracking { .. })
    }

    /// The current step index, or `None` when inactive.
    #[inline]
    pub fn current(self) -> Option<StepIndex> {
        match self {
            TrackerState::Tracking { current } => Some(current),
            TrackerState::Inactive => None,
        }
    }
}
