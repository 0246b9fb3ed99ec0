//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `handlers.rs` - the [`ToolService`] trait every tool backend implements
//! - `adapter.rs` - [`ToolAdapter`], turning a service into an MCP tool result
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the rmcp server handler
//! - `registry.rs` - tool construction from config, listing and JSON dispatch
//! - `error.rs` - tool-specific error types

mod adapter;
pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use adapter::{CONTENT_PRIORITY, ToolAdapter};
pub use error::{InvokeError, ToolError};
pub use handlers::ToolService;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
