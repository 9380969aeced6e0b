//! Error types for reducer construction.

use thiserror::Error;

/// Errors raised while building a reducer binding.
///
/// Validation happens at construction time only; dispatch never fails.
/// Actions whose kind matches no binding pass state through unchanged,
/// and handler panics propagate to the caller uncaught.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReducerError {
    /// A value other than a string was supplied as an action type.
    /// `received` holds the offending value's JSON rendering.
    #[error("action type must be a string, received: {received}")]
    InvalidActionType { received: String },
}
