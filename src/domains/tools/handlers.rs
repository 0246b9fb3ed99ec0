//! Tool service trait.
//!
//! Anything that can be named, described and executed with a typed input
//! can be exposed as an MCP tool through [`super::ToolAdapter`].

/// A typed, synchronous operation exposed as a tool.
pub trait ToolService<In, Out> {
    /// Error returned by [`ToolService::execute`].
    type Error;

    /// Unique tool name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Run the operation.
    fn execute(&self, input: In) -> Result<Out, Self::Error>;
}
