use crate::domain::entities::tool::{CallToolResult, ToolDefinition};
use std::sync::Arc;

/// A tool bound to everything it needs except its arguments.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: serde_json::Value) -> CallToolResult;
}

/// Dispatch table of the transport that exposes tools to the agent.
pub trait ToolHost {
    fn register_tool(&mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>);
}
