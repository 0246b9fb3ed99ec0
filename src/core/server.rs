//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` implements the rmcp `ServerHandler`. Tool calls are routed
//! through a `ToolRouter` built from the [`ToolRegistry`], so adding a tool
//! never touches this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Checks domain name availability, premium pricing and \
registration fees through the Namecheap registrar API. Pass up to 50 domains per call.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, shared with the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, registering every tool the config enables.
    pub fn new(config: Config) -> Self {
        let registry = ToolRegistry::from_config(&config);
        Self::with_registry(config, registry)
    }

    /// Create a server around an already-built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let tool_router = build_tool_router::<Self>(&registry);
        info!("Registered {} tool(s)", tool_router.list_all().len());

        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Usage instructions reported to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> super::Result<serde_json::Value> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_server_lists_configured_tool() {
        let server = McpServer::new(configured());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "check_availability_namecheap");
        assert_eq!(
            tools[0]["description"],
            "Check domain availability using Namecheap API"
        );
        assert!(tools[0]["inputSchema"]["properties"]["domains"].is_object());
    }

    #[test]
    fn test_server_without_credentials_has_no_tools() {
        let server = McpServer::new(Config::default());
        assert!(server.list_tools().is_empty());
        assert_eq!(server.name(), "domain-checker");
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("Namecheap"));
    }

    #[tokio::test]
    async fn test_server_call_tool_validation_failure() {
        let server = McpServer::new(configured());
        let value = server
            .call_tool(
                "check_availability_namecheap",
                serde_json::json!({ "domains": [] }),
            )
            .await
            .unwrap();
        assert_eq!(value["isError"], true);
    }
}
