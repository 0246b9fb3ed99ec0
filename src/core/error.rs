//! Error types and handling for the MCP server.
//!
//! A unified error type over the tools domain, transports and JSON handling.
//! Registrar failures never reach this level: the tool layer reports them
//! to the client inside the tool result.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller sent something unusable (unknown tool, bad arguments).
    pub fn is_client_error(&self) -> bool {
        use crate::domains::tools::ToolError;
        matches!(
            self,
            Self::Tool(ToolError::NotFound(_) | ToolError::InvalidArguments(_))
        )
    }
}
