use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid route: a route must have at least one step")]
    InvalidRoute,
}

pub type TrackerResult<T> = Result<T, TrackerError>;
