//! Error types for the User directory.

use thiserror::Error;

/// Errors that can occur during directory operations.
///
/// Each variant corresponds to one HTTP outcome; see
/// [`crate::api::response`] for the status and body each one produces.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The path parameter is not an integer.
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    /// The request body could not be bound to a [`UserInput`](crate::model::UserInput).
    #[error("{0}")]
    InvalidBody(String),

    /// The `id` embedded in an update body is zero or negative.
    #[error("Invalid body id: {0}")]
    InvalidBodyId(i64),

    /// No user matched, or the directory is empty.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A delete matched no user.
    #[error("Action not accepted: {0}")]
    NotAccepted(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
