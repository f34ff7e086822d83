//! Announcement events handed to the speech output.
//!
//! Every event renders to a spoken sentence through [`Display`]:
//!
//! | Event                      | Text                                                      |
//! |----------------------------|-----------------------------------------------------------|
//! | `Initial` (one step)       | `In 50 meters, Turn left.`                                |
//! | `Initial` (with `then`)    | `In 50 meters, Turn left then in 120 meters, Turn right.` |
//! | `Step`                     | `In 120 meters, Turn right.`                              |
//! | `Arrived`                  | `You have arrived at Cafe.`                               |
//!
//! Distances are rounded to whole metres.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use tbt_core::StepIndex;
use tbt_route::RouteStep;

// ── Cue ───────────────────────────────────────────────────────────────────────

/// The spoken part of one step: its index, instruction and distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub step:        StepIndex,
    pub instruction: String,
    pub distance_m:  f64,
}

impl Cue {
    pub fn from_step(step: &RouteStep) -> Self {
        Self {
            step:        step.index,
            instruction: step.instruction.clone(),
            distance_m:  step.distance_m,
        }
    }

    fn write_phrase(&self, f: &mut fmt::Formatter<'_>, leading: &str) -> fmt::Result {
        write!(f, "{leading} {:.0} meters, {}", self.distance_m, self.instruction)
    }
}

// ── AnnouncementEvent ─────────────────────────────────────────────────────────

/// Produced once per step transition; never stored by the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnouncementEvent {
    /// Emitted when a route is assigned: the first step, plus the second one
    /// as a "then" follow-up when the route has it.
    Initial { first: Cue, then: Option<Cue> },

    /// The tracker advanced and `0` is the new current step.
    Step(Cue),

    /// The last step's region was entered; tracking is over.
    Arrived {
        step:        StepIndex,
        instruction: String,
        destination: Option<String>,
    },
}

impl AnnouncementEvent {
    /// Index of the step this event is about.
    pub fn step(&self) -> StepIndex {
        match self {
            AnnouncementEvent::Initial { first, .. } => first.step,
            AnnouncementEvent::Step(cue)             => cue.step,
            AnnouncementEvent::Arrived { step, .. }  => *step,
        }
    }

    pub fn instruction(&self) -> &str {
        match self {
            AnnouncementEvent::Initial { first, .. }       => &first.instruction,
            AnnouncementEvent::Step(cue)                   => &cue.instruction,
            AnnouncementEvent::Arrived { instruction, .. } => instruction,
        }
    }

    /// Distance of the announced step in metres (0 for `Arrived`).
    pub fn distance_m(&self) -> f64 {
        match self {
            AnnouncementEvent::Initial { first, .. } => first.distance_m,
            AnnouncementEvent::Step(cue)             => cue.distance_m,
            AnnouncementEvent::Arrived { .. }        => 0.0,
        }
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, AnnouncementEvent::Arrived { .. })
    }

    /// The sentence to speak.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnnouncementEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnouncementEvent::Initial { first, then } => {
                first.write_phrase(f, "In")?;
                if let Some(then) = then {
                    then.write_phrase(f, " then in")?;
                }
                f.write_str(".")
            }
            AnnouncementEvent::Step(cue) => {
                cue.write_phrase(f, "In")?;
                f.write_str(".")
            }
            AnnouncementEvent::Arrived { destination, .. } => match destination {
                Some(name) => write!(f, "You have arrived at {name}."),
                None       => f.write_str("You have arrived at your destination."),
            },
        }
    }
}
