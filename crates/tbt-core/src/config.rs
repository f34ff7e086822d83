//! Tracker configuration.
//!
//! # Defaults
//!
//! | Field              | Default                       |
//! |--------------------|-------------------------------|
//! | `default_radius_m` | 20.0                          |
//! | `policy`           | `MonitoringPolicy::AllSteps`  |
//! | `transport`        | `TransportMode::Automobile`   |
//!
//! Applications typically load this from a JSON file (with the `serde`
//! feature) and hand it to the session builder, which calls
//! [`TrackerConfig::validate`] before anything is registered.

use crate::{TbtError, TbtResult, TransportMode};

/// Proximity radius given to a step when the route does not specify one.
pub const DEFAULT_RADIUS_M: f64 = 20.0;

/// Which steps get a proximity region registered with the monitor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MonitoringPolicy {
    /// Register every step up front; each region is dropped once passed.
    #[default]
    AllSteps,
    /// Register only the current step; the next one is added on advance.
    /// Uses fewer platform slots and cannot double-fire on overlapping
    /// regions.
    NextStepOnly,
}

/// Settings shared by the tracker and the session that drives it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Radius in metres for steps built without an explicit radius.
    pub default_radius_m: f64,

    /// Region registration policy.
    pub policy: MonitoringPolicy,

    /// Transport mode passed to the route planner.
    pub transport: TransportMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_radius_m: DEFAULT_RADIUS_M,
            policy:           MonitoringPolicy::default(),
            transport:        TransportMode::default(),
        }
    }
}

impl TrackerConfig {
    /// Reject radii that could never be entered or that are not numbers.
    pub fn validate(&self) -> TbtResult<()> {
        if !self.default_radius_m.is_finite() || self.default_radius_m <= 0.0 {
            return Err(TbtError::Config(format!(
                "default_radius_m must be a positive finite number, got {}",
                self.default_radius_m
            )));
        }
        Ok(())
    }
}
