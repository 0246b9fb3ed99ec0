//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Construction of the registrar-backed tools from configuration
//! - Tool metadata for listing
//! - Dispatch of JSON tool calls (used by the HTTP transport)

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::Result;
use crate::domains::registrar::{NamecheapClient, RegistrarError};

use super::ToolAdapter;
use super::ToolError;
use super::definitions::{CheckAvailabilityAdapter, CheckAvailabilityTool};

/// Tool registry - owns the adapters for every enabled tool.
///
/// Tools whose credentials are missing are simply not registered.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    check_availability: Option<Arc<CheckAvailabilityAdapter>>,
}

impl ToolRegistry {
    /// Build the registry from configuration, constructing clients once.
    pub fn from_config(config: &Config) -> Self {
        let check_availability = match NamecheapClient::new(config.namecheap.clone()) {
            Ok(client) => {
                info!(endpoint = client.endpoint(), "Namecheap tool enabled");
                Some(Arc::new(ToolAdapter::new(client)))
            }
            Err(RegistrarError::MissingCredentials) => {
                info!("Namecheap tool disabled - missing configuration");
                None
            }
            Err(e) => {
                warn!("Failed to create Namecheap service: {}", e);
                None
            }
        };

        Self { check_availability }
    }

    /// Registry with the given availability adapter.
    pub fn with_check_availability(adapter: Arc<CheckAvailabilityAdapter>) -> Self {
        Self {
            check_availability: Some(adapter),
        }
    }

    /// The availability adapter, if registered.
    pub fn check_availability(&self) -> Option<&Arc<CheckAvailabilityAdapter>> {
        self.check_availability.as_ref()
    }

    /// Get all registered tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.check_availability.is_some() {
            names.push(CheckAvailabilityTool::NAME);
        }
        names
    }

    /// Get all registered tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.check_availability
            .iter()
            .map(|adapter| adapter.to_tool())
            .collect()
    }

    /// Dispatch a JSON tool call to the appropriate handler.
    ///
    /// Returns the serialized `CallToolResult`. Tool failures are reported
    /// inside the result (`isError`), not as `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value> {
        match (name, &self.check_availability) {
            (CheckAvailabilityTool::NAME, Some(adapter)) => {
                let params = CheckAvailabilityTool::parse_arguments(arguments)?;
                let result = CheckAvailabilityTool::run(adapter.clone(), params).await?;
                Ok(serde_json::to_value(result)?)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::registrar::Credentials;

    fn configured() -> Config {
        let mut config = Config::default();
        config.namecheap = Credentials {
            api_user: "testuser".to_string(),
            api_key: "testkey".to_string(),
            username: "testusername".to_string(),
            client_ip: "192.168.1.1".to_string(),
            endpoint: String::new(),
        };
        config
    }

    #[test]
    fn test_registry_without_credentials_is_empty() {
        let registry = ToolRegistry::from_config(&Config::default());
        assert!(registry.tool_names().is_empty());
        assert!(registry.get_all_tools().is_empty());
        assert!(registry.check_availability().is_none());
    }

    #[test]
    fn test_registry_with_credentials() {
        let registry = ToolRegistry::from_config(&configured());
        assert_eq!(registry.tool_names(), vec!["check_availability_namecheap"]);

        let tools = registry.get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "check_availability_namecheap");
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::from_config(&configured());
        let result = tokio_test::block_on(registry.call_tool("unknown", serde_json::json!({})));
        assert!(matches!(result, Err(Error::Tool(ToolError::NotFound(_)))));
    }

    #[test]
    fn test_registry_call_unregistered_tool() {
        let registry = ToolRegistry::default();
        let result = tokio_test::block_on(
            registry.call_tool(CheckAvailabilityTool::NAME, serde_json::json!({ "domains": [] })),
        );
        assert!(matches!(result, Err(Error::Tool(ToolError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_registry_call_invalid_arguments() {
        let registry = ToolRegistry::from_config(&configured());
        let result = registry
            .call_tool(CheckAvailabilityTool::NAME, serde_json::json!({ "domain": "x.com" }))
            .await;
        assert!(matches!(result, Err(Error::Tool(ToolError::InvalidArguments(_)))));
    }

    #[tokio::test]
    async fn test_registry_call_reports_tool_failure_in_result() {
        let registry = ToolRegistry::from_config(&configured());
        let value = registry
            .call_tool(CheckAvailabilityTool::NAME, serde_json::json!({ "domains": [] }))
            .await
            .unwrap();

        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["text"], "missing domains to check");
    }
}
