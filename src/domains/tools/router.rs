//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered tool contributes its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::CheckAvailabilityTool;
use super::registry::ToolRegistry;

/// Build the tool router with every tool the registry enabled.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();

    if let Some(adapter) = registry.check_availability() {
        router = router.with_route(CheckAvailabilityTool::create_route(adapter.clone()));
    }

    router
}
