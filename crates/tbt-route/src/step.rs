//! A single route step.

use tbt_core::{Coordinate, StepIndex};

/// One manoeuvre of a computed route.
///
/// `distance_m` is the length of the step itself, which the speech output
/// reads as "In {distance} meters".  `anchor` is where the manoeuvre happens
/// and, together with `radius_m`, defines the proximity region that advances
/// the tracker past this step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Position in the route, from 0 in traversal order.
    pub index: StepIndex,

    /// Spoken instruction, e.g. "Turn left onto Main Street".
    pub instruction: String,

    /// Step length in metres.
    pub distance_m: f64,

    /// Manoeuvre location.
    pub anchor: Coordinate,

    /// Proximity radius in metres.
    pub radius_m: f64,
}

impl RouteStep {
    /// `true` if `at` lies inside this step's proximity circle.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.anchor.distance_m(at) <= self.radius_m
    }
}
