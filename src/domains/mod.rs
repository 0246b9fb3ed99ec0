//! Domains module containing business logic organized by bounded contexts.
//!
//! - `registrar`: talks to the Namecheap API and normalizes its answers
//! - `tools`: bridges typed services onto MCP tools

pub mod registrar;
pub mod tools;
