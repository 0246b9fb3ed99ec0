//! Namecheap domain availability tool.
//!
//! Exposes [`NamecheapClient::check`] as the `check_availability_namecheap`
//! MCP tool via the generic [`ToolAdapter`].

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::domains::registrar::{DomainResult, NamecheapClient, RegistrarError};
use crate::domains::tools::{InvokeError, ToolAdapter, ToolError, ToolService};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the availability check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckAvailabilityParams {
    /// Domains to check.
    #[schemars(description = "The domains to check, e.g. example.com,example.org")]
    pub domains: Vec<String>,
}

/// Structured output of the availability check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckAvailabilityOutput {
    /// One entry per domain the registrar reported on.
    #[schemars(description = "The results of the domain checks")]
    pub results: Vec<DomainResult>,
}

/// The adapter type registered for this tool.
pub type CheckAvailabilityAdapter =
    ToolAdapter<NamecheapClient, CheckAvailabilityParams, CheckAvailabilityOutput>;

impl ToolService<CheckAvailabilityParams, CheckAvailabilityOutput> for NamecheapClient {
    type Error = RegistrarError;

    fn name(&self) -> &str {
        CheckAvailabilityTool::NAME
    }

    fn description(&self) -> &str {
        CheckAvailabilityTool::DESCRIPTION
    }

    fn execute(
        &self,
        input: CheckAvailabilityParams,
    ) -> Result<CheckAvailabilityOutput, Self::Error> {
        self.check(&input.domains)
            .map(|results| CheckAvailabilityOutput { results })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Domain availability tool backed by Namecheap.
pub struct CheckAvailabilityTool;

impl CheckAvailabilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_availability_namecheap";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check domain availability using Namecheap API";

    /// Execute the tool logic. Blocks on the registrar call.
    ///
    /// Failures become an `isError` result carrying the error message.
    #[instrument(skip_all, fields(domain_count = params.domains.len()))]
    pub fn execute(
        adapter: &CheckAvailabilityAdapter,
        params: CheckAvailabilityParams,
    ) -> CallToolResult {
        info!("Domain availability check requested");

        match adapter.invoke(params) {
            Ok(result) => result,
            Err(InvokeError::Service(e)) if e.is_invalid_input() => {
                warn!("Rejected domain availability check: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
            Err(e) => {
                error!("Domain availability check failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Run [`Self::execute`] on the blocking pool.
    pub async fn run(
        adapter: Arc<CheckAvailabilityAdapter>,
        params: CheckAvailabilityParams,
    ) -> Result<CallToolResult, ToolError> {
        tokio::task::spawn_blocking(move || Self::execute(&adapter, params))
            .await
            .map_err(|e| ToolError::internal(format!("Task execution failed: {}", e)))
    }

    /// Parse raw JSON arguments into tool parameters.
    pub fn parse_arguments(
        arguments: serde_json::Value,
    ) -> Result<CheckAvailabilityParams, ToolError> {
        serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(adapter: Arc<CheckAvailabilityAdapter>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(adapter.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let adapter = adapter.clone();
            async move {
                let params = Self::parse_arguments(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::run(adapter, params)
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::registrar::Credentials;
    use rmcp::model::RawContent;

    fn test_adapter() -> CheckAvailabilityAdapter {
        let client = NamecheapClient::new(Credentials {
            api_user: "testuser".to_string(),
            api_key: "testkey".to_string(),
            username: "testusername".to_string(),
            client_ip: "192.168.1.1".to_string(),
            endpoint: String::new(),
        })
        .unwrap();
        ToolAdapter::new(client)
    }

    fn error_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_params_deserialization() {
        let json = r#"{"domains": ["example.com", "example.org"]}"#;
        let params: CheckAvailabilityParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.domains, vec!["example.com", "example.org"]);
    }

    #[test]
    fn test_parse_arguments_missing_domains() {
        let result = CheckAvailabilityTool::parse_arguments(serde_json::json!({ "limit": 3 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_adapter_descriptor() {
        let tool = test_adapter().to_tool();
        assert_eq!(tool.name, "check_availability_namecheap");
        assert_eq!(
            tool.description.as_deref(),
            Some("Check domain availability using Namecheap API")
        );
        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("domains"));
    }

    #[test]
    fn test_execute_empty_domains_is_error_result() {
        let params = CheckAvailabilityParams { domains: vec![] };
        let result = CheckAvailabilityTool::execute(&test_adapter(), params);

        assert_eq!(result.is_error, Some(true));
        assert_eq!(error_text(&result), "missing domains to check");
    }

    #[test]
    fn test_execute_too_many_domains_is_error_result() {
        let params = CheckAvailabilityParams {
            domains: (0..60).map(|i| format!("d{i}.com")).collect(),
        };
        let result = CheckAvailabilityTool::execute(&test_adapter(), params);

        assert_eq!(result.is_error, Some(true));
        assert!(error_text(&result).contains("max of 50 domains"));
    }

    #[tokio::test]
    async fn test_run_on_blocking_pool() {
        let params = CheckAvailabilityParams { domains: vec![] };
        let result = CheckAvailabilityTool::run(Arc::new(test_adapter()), params)
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
