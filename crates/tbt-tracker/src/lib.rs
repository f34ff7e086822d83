//! `tbt-tracker` — turn sequencing driven by proximity-region entry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`state`]    | `TrackerState` — `Inactive` / `Tracking { current }`            |
//! | [`region`]   | `ProximityRegion`, `RegionTable`, `RegionMonitor` trait         |
//! | [`geofence`] | `Geofence` — in-process `RegionMonitor` fed by location fixes   |
//! | [`announce`] | `AnnouncementEvent`, `Cue`                                      |
//! | [`tracker`]  | `TurnTracker<M>` — the state machine                            |
//! | [`error`]    | `TrackerError`, `TrackerResult<T>`                              |
//!
//! # State machine
//!
//! ```text
//! Inactive      --set_route-->            Tracking(0)
//! Tracking(i)   --region i entered-->     Tracking(i+1)   (i+1 < N)
//! Tracking(N-1) --region N-1 entered-->   Inactive        (Arrived)
//! Tracking(*)   --clear-->                Inactive
//! ```
//!
//! Every other region event is a self-loop: unknown ids, ids of passed
//! steps, and ids of steps further ahead are all ignored.
//!
//! Region identifiers are the step index rendered in decimal (`"0"`, `"1"`,
//! …).  The tracker keeps an explicit identifier → [`StepIndex`] table for
//! the regions it currently has registered and never parses ids back.
//!
//! [`StepIndex`]: tbt_core::StepIndex

pub mod announce;
pub mod error;
pub mod geofence;
pub mod region;
pub mod state;
pub mod tracker;


pub use announce::{AnnouncementEvent, Cue};
pub use error::{TrackerError, TrackerResult};
pub use geofence::Geofence;
pub use region::{region_id, NoopMonitor, ProximityRegion, RegionMonitor, RegionTable};
pub use state::TrackerState;
pub use tracker::TurnTracker;
