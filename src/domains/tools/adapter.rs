//! Generic tool adapter.
//!
//! Bridges any [`ToolService`] onto the MCP tool-call contract: run the
//! service, serialize its output to JSON text, and wrap it in a single
//! assistant-facing content block.

use std::marker::PhantomData;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Role, Tool},
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument};

use super::error::InvokeError;
use super::handlers::ToolService;

/// Priority attached to every content block produced by the adapter.
pub const CONTENT_PRIORITY: f32 = 1.0;

/// Wraps a [`ToolService`] so it can answer MCP tool calls.
///
/// The adapter holds no state of its own; it is as shareable as the service.
pub struct ToolAdapter<S, In, Out> {
    service: S,
    _marker: PhantomData<fn(In) -> Out>,
}

impl<S, In, Out> ToolAdapter<S, In, Out>
where
    S: ToolService<In, Out>,
{
    /// Wrap a service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            _marker: PhantomData,
        }
    }

    /// The wrapped service's name.
    pub fn name(&self) -> &str {
        self.service.name()
    }

    /// The wrapped service's description.
    pub fn description(&self) -> &str {
        self.service.description()
    }

    /// The wrapped service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Execute the service and package its output as a tool result.
    ///
    /// Service failures come back unchanged inside [`InvokeError::Service`].
    #[instrument(skip_all, fields(tool = %self.service.name()))]
    pub fn invoke(&self, input: In) -> Result<CallToolResult, InvokeError<S::Error>>
    where
        Out: Serialize,
    {
        let output = self.service.execute(input).map_err(InvokeError::Service)?;

        let text = serde_json::to_string(&output).map_err(InvokeError::SerializationFailed)?;
        let structured = serde_json::to_value(&output).map_err(InvokeError::SerializationFailed)?;

        debug!(bytes = text.len(), "Serialized tool output");

        Ok(CallToolResult {
            content: vec![
                Content::text(text)
                    .with_audience(vec![Role::Assistant])
                    .with_priority(CONTENT_PRIORITY),
            ],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        })
    }

    /// Tool descriptor, with the input schema derived from `In`.
    pub fn to_tool(&self) -> Tool
    where
        In: JsonSchema + 'static,
    {
        Tool {
            name: self.name().to_string().into(),
            description: Some(self.description().to_string().into()),
            input_schema: cached_schema_for_type::<In>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde::{Deserialize, Serializer, ser::Error as _};

    #[derive(Debug, Deserialize, JsonSchema)]
    struct GreetParams {
        /// Who to greet.
        name: String,
    }

    #[derive(Debug, Serialize)]
    struct Greeting {
        message: String,
        length: usize,
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("unavailable: {0}")]
    struct Unavailable(&'static str);

    struct Greeter;

    impl ToolService<GreetParams, Greeting> for Greeter {
        type Error = Unavailable;

        fn name(&self) -> &str {
            "greet"
        }

        fn description(&self) -> &str {
            "Say hello"
        }

        fn execute(&self, input: GreetParams) -> Result<Greeting, Self::Error> {
            let message = format!("Hello, {}!", input.name);
            Ok(Greeting {
                length: message.len(),
                message,
            })
        }
    }

    struct Broken;

    impl ToolService<GreetParams, Greeting> for Broken {
        type Error = Unavailable;

        fn name(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        fn execute(&self, _input: GreetParams) -> Result<Greeting, Self::Error> {
            Err(Unavailable("upstream down"))
        }
    }

    struct Opaque;

    impl Serialize for Opaque {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("no text representation"))
        }
    }

    struct OpaqueService;

    impl ToolService<(), Opaque> for OpaqueService {
        type Error = Unavailable;

        fn name(&self) -> &str {
            "opaque"
        }

        fn description(&self) -> &str {
            "Returns something unserializable"
        }

        fn execute(&self, _input: ()) -> Result<Opaque, Self::Error> {
            Ok(Opaque)
        }
    }

    fn params(name: &str) -> GreetParams {
        GreetParams {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_invoke_serializes_output() {
        let adapter = ToolAdapter::new(Greeter);
        let result = adapter.invoke(params("Ada")).unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({ "message": "Hello, Ada!", "length": 11 })
        );
        assert_eq!(result.structured_content, Some(parsed));
    }

    #[test]
    fn test_invoke_annotates_content() {
        let adapter = ToolAdapter::new(Greeter);
        let result = adapter.invoke(params("Ada")).unwrap();

        let content = &result.content[0];
        assert_eq!(content.audience(), Some(&vec![Role::Assistant]));
        assert_eq!(content.priority(), Some(1.0));
    }

    #[test]
    fn test_invoke_passes_service_error_through() {
        let adapter = ToolAdapter::new(Broken);
        let err = adapter.invoke(params("Ada")).unwrap_err();
        assert_eq!(err.into_service(), Some(Unavailable("upstream down")));
    }

    #[test]
    fn test_invoke_serialization_failure() {
        let adapter = ToolAdapter::new(OpaqueService);
        let err = adapter.invoke(()).unwrap_err();
        assert!(matches!(err, InvokeError::SerializationFailed(_)));
    }

    #[test]
    fn test_to_tool_descriptor() {
        let adapter = ToolAdapter::new(Greeter);
        let tool = adapter.to_tool();

        assert_eq!(tool.name, "greet");
        assert_eq!(tool.description.as_deref(), Some("Say hello"));
        assert!(tool.input_schema.contains_key("properties"));
        assert_eq!(adapter.service().name(), "greet");
    }
}
