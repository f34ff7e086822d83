//! `tbt-session` — the adapter between a host UI and the turn tracker.
//!
//! # Event flow
//!
//! ```text
//! host callback                     session                         collaborators
//! ─────────────                     ───────                         ─────────────
//! location fix        ──► on_location ──► tracker.on_location ──►   RegionMonitor
//! region entered      ──► on_region_entered ──► tracker          ──► SpeechSink
//! search started      ──► begin_search   (clears tracking)
//! result picked       ──► request_directions ──► RoutePlanner ──► tracker.set_route
//! search cancelled    ──► cancel         (clears tracking, stops speech)
//! ```
//!
//! Every announcement the tracker produces is spoken through the session's
//! [`SpeechSink`] and also returned to the caller (for on-screen display).
//!
//! # Threading
//!
//! [`NavigationSession`] is driven through `&mut self` and never blocks.
//! Hosts that deliver region callbacks on a different thread from UI actions
//! wrap it in a [`SharedSession`], which serializes every call behind one
//! lock.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tbt_route::{Destination, DirectPlanner};
//! use tbt_session::{SessionBuilder, Transcript};
//! use tbt_tracker::Geofence;
//!
//! let mut session = SessionBuilder::new(DirectPlanner, Geofence::new(), Transcript::new())
//!     .build()?;
//! session.on_location(here);
//! session.request_directions(Destination::new("Cafe", cafe))?;
//! ```

pub mod builder;
pub mod error;
pub mod session;
pub mod shared;
pub mod speech;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use session::NavigationSession;
pub use shared::SharedSession;
pub use speech::{NoopSpeech, SpeechSink, Transcript};
