//! Tool-specific error types.

use thiserror::Error;

/// Errors raised while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found (or is not registered).
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Failure of [`super::ToolAdapter::invoke`].
///
/// `Service` carries the wrapped service's own error untouched.
#[derive(Debug, Error)]
pub enum InvokeError<E> {
    /// The wrapped service failed.
    #[error(transparent)]
    Service(E),

    /// The service output could not be serialized to JSON.
    #[error("error marshaling results to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),
}

impl<E> InvokeError<E> {
    /// The service error, if that is what failed.
    pub fn into_service(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            Self::SerializationFailed(_) => None,
        }
    }
}
