//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, always available
//! - **HTTP**: JSON-RPC over POST with CORS - feature: `http` (default)

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
