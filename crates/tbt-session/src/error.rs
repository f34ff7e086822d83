use tbt_core::TbtError;
use tbt_route::RouteError;
use tbt_tracker::TrackerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no location fix yet; cannot request directions")]
    NoLocationFix,

    #[error("session configuration error: {0}")]
    Config(#[from] TbtError),

    #[error("routing failed: {0}")]
    Routing(#[from] RouteError),

    #[error("tracker rejected route: {0}")]
    Tracker(#[from] TrackerError),
}

pub type SessionResult<T> = Result<T, SessionError>;
