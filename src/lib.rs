//! Domain Checker MCP Server Library
//!
//! Exposes Namecheap domain availability lookups as a Model Context Protocol
//! tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the MCP server handler
//!   and the STDIO/HTTP transports
//! - **domains**: business logic
//!   - **registrar**: the Namecheap API client and result normalization
//!   - **tools**: the generic tool adapter and the tool registry
//!
//! # Example
//!
//! ```rust,no_run
//! use domain_checker_mcp::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
