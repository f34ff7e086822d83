//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `TbtError` where a
//! configuration failure can surface through them.

use thiserror::Error;

/// The top-level error type for `tbt-core`.
#[derive(Debug, Error)]
pub enum TbtError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tbt-core`.
pub type TbtResult<T> = Result<T, TbtError>;
