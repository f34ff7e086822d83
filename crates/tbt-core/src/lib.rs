//! `tbt-core` — foundational types for the turn-by-turn workspace.
//!
//! This crate is a dependency of every other `tbt-*` crate.  It has no
//! `tbt-*` dependencies and only `thiserror` as a hard external one (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StepIndex`                                           |
//! | [`geo`]         | `Coordinate`, haversine distance, offsets             |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`config`]      | `TrackerConfig`, `MonitoringPolicy`                   |
//! | [`error`]       | `TbtError`, `TbtResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MonitoringPolicy, TrackerConfig, DEFAULT_RADIUS_M};
pub use error::{TbtError, TbtResult};
pub use geo::Coordinate;
pub use ids::StepIndex;
pub use transport::TransportMode;
