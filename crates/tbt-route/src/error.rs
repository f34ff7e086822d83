//! Route-subsystem error type.

use thiserror::Error;

use tbt_core::{Coordinate, StepIndex};

/// Errors produced by `tbt-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: Coordinate, to: Coordinate },

    #[error("step at position {position} carries index {found}")]
    StepOrder { position: usize, found: StepIndex },

    #[error("route exceeds the maximum step count")]
    TooManySteps,

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
