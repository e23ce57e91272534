//! Error types for meeting-solver operations.

use thiserror::Error;

/// Errors raised while constructing scheduling values.
///
/// Queries themselves never fail: every well-formed input has a defined answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// A constructor argument violated the value's invariants
    /// (e.g. `start >= end`, or a minute outside the day).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
