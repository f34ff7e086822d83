//! Route representation and builder.
//!
//! A [`Route`] is an ordered list of [`RouteStep`]s whose `index` fields
//! always equal their position.  Build one with [`RouteBuilder`], which
//! assigns indices and fills in the default radius, or hand a step list to
//! [`Route::from_steps`], which checks the indices.  Deserialization goes
//! through the same check, so the invariant cannot be broken from outside.

use tbt_core::{Coordinate, StepIndex, TransportMode, DEFAULT_RADIUS_M};

use crate::{RouteError, RouteResult, RouteStep};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered sequence of steps from origin to destination.
///
/// A route may be empty (a planner that found nothing useful); the tracker
/// rejects empty routes when they are assigned.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RouteParts"))]
pub struct Route {
    steps: Vec<RouteStep>,

    /// Transport mode the route was computed for.
    pub transport: TransportMode,

    /// Display name of the destination, if the planner knew one.
    pub destination_name: Option<String>,
}

impl Route {
    /// A route with no steps.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing step list.
    ///
    /// # Errors
    ///
    /// [`RouteError::StepOrder`] if any step's `index` differs from its
    /// position in `steps`.
    pub fn from_steps(steps: Vec<RouteStep>) -> RouteResult<Self> {
        for (position, step) in steps.iter().enumerate() {
            if step.index.index() != position {
                return Err(RouteError::StepOrder { position, found: step.index });
            }
        }
        Ok(Self { steps, ..Self::default() })
    }

    /// Steps in traversal order.
    #[inline]
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, or `None` if out of bounds.
    #[inline]
    pub fn step(&self, index: StepIndex) -> Option<&RouteStep> {
        self.steps.get(index.index())
    }

    /// Sum of all step distances in metres.
    pub fn total_distance_m(&self) -> f64 {
        self.steps.iter().map(|s| s.distance_m).sum()
    }
}

/// Unchecked wire form of [`Route`]; converted through [`Route::from_steps`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RouteParts {
    steps:            Vec<RouteStep>,
    #[serde(default)]
    transport:        TransportMode,
    #[serde(default)]
    destination_name: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RouteParts> for Route {
    type Error = RouteError;

    fn try_from(parts: RouteParts) -> RouteResult<Route> {
        let mut route = Route::from_steps(parts.steps)?;
        route.transport        = parts.transport;
        route.destination_name = parts.destination_name;
        Ok(route)
    }
}

// ── RouteBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Route`] step by step, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tbt_core::Coordinate;
/// use tbt_route::RouteBuilder;
///
/// let mut b = RouteBuilder::new();
/// b.add_step("Turn left", 50.0, Coordinate::new(37.3349, -122.0090)).unwrap();
/// b.add_step("Turn right", 120.0, Coordinate::new(37.3353, -122.0102)).unwrap();
/// let route = b.build();
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.steps()[1].radius_m, 20.0);
/// ```
pub struct RouteBuilder {
    steps:            Vec<RouteStep>,
    default_radius_m: f64,
    transport:        TransportMode,
    destination_name: Option<String>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::with_default_radius(DEFAULT_RADIUS_M)
    }

    /// Builder whose steps default to `radius_m` instead of 20 m.
    pub fn with_default_radius(radius_m: f64) -> Self {
        Self {
            steps:            Vec::new(),
            default_radius_m: radius_m,
            transport:        TransportMode::default(),
            destination_name: None,
        }
    }

    pub fn transport(mut self, mode: TransportMode) -> Self {
        self.transport = mode;
        self
    }

    pub fn destination_name(mut self, name: impl Into<String>) -> Self {
        self.destination_name = Some(name.into());
        self
    }

    /// Append a step with the default radius and return its index.
    pub fn add_step(
        &mut self,
        instruction: impl Into<String>,
        distance_m:  f64,
        anchor:      Coordinate,
    ) -> RouteResult<StepIndex> {
        let radius = self.default_radius_m;
        self.add_step_with_radius(instruction, distance_m, anchor, radius)
    }

    /// Append a step with an explicit proximity radius.
    ///
    /// # Errors
    ///
    /// [`RouteError::TooManySteps`] once the route already holds
    /// `u32::MAX + 1` steps.
    pub fn add_step_with_radius(
        &mut self,
        instruction: impl Into<String>,
        distance_m:  f64,
        anchor:      Coordinate,
        radius_m:    f64,
    ) -> RouteResult<StepIndex> {
        let index = StepIndex::try_from(self.steps.len())
            .map_err(|_| RouteError::TooManySteps)?;
        self.steps.push(RouteStep {
            index,
            instruction: instruction.into(),
            distance_m,
            anchor,
            radius_m,
        });
        Ok(index)
    }

    /// Consume the builder and produce a [`Route`].
    pub fn build(self) -> Route {
        Route {
            steps:            self.steps,
            transport:        self.transport,
            destination_name: self.destination_name,
        }
    }
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self::new()
    }
}
