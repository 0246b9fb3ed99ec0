//! Registrar-specific error types.

use thiserror::Error;

/// Result type for registrar operations.
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Errors that can occur while checking domains against the registrar.
///
/// Per-domain anomalies (unparseable prices, odd availability tokens) are not
/// represented here; they are normalized away in [`super::map_results`].
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// API user, API key, username or client IP was empty.
    #[error("missing API credentials")]
    MissingCredentials,

    /// The lookup request contained no domains.
    #[error("missing domains to check")]
    NoDomainsProvided,

    /// The lookup request exceeded the per-call domain limit.
    #[error("max of {max} domains are allowed in a single check command (got {count})")]
    TooManyDomains { count: usize, max: usize },

    /// The endpoint could not be parsed as a URL.
    #[error("failed to build request URL: {0}")]
    RequestBuildFailed(#[from] url::ParseError),

    /// Connection failure, timeout, or body read failure.
    #[error("HTTP request failed: {0}")]
    TransportFailed(#[from] reqwest::Error),

    /// The response body was not a valid registrar XML envelope.
    #[error("failed to decode XML response: {0}")]
    DecodeFailed(#[from] quick_xml::DeError),

    /// The registrar answered with a non-OK status.
    #[error("API error: {0}")]
    UpstreamError(String),
}

impl RegistrarError {
    /// Create an upstream error from the registrar's message.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamError(msg.into())
    }

    /// Whether the caller can fix this by changing the domain list.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::NoDomainsProvided | Self::TooManyDomains { .. })
    }
}
