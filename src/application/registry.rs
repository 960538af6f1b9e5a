use crate::application::context::ToolContext;
use crate::application::tools::{CollectionArg, MemoryDebugTool, MemorySearchTool, MemoryStoreTool, Tool};
use crate::domain::entities::tool::{CallToolResult, ToolDefinition};
use crate::domain::ports::tool_host::{ToolHandler, ToolHost};
use std::sync::Arc;
use tracing::debug;

/// Ordered table of tool contracts. Names are not deduplicated, so callers
/// must not register two tools under the same name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard tool set, in store, search, debug order.
    pub fn create(default_collection: Option<&str>) -> Self {
        let collection = CollectionArg::for_default(default_collection);
        let mut registry = Self::new();
        registry.register_tool(Arc::new(MemoryStoreTool::new(collection)));
        registry.register_tool(Arc::new(MemorySearchTool::new(collection)));
        registry.register_tool(Arc::new(MemoryDebugTool::new(collection)));
        registry
    }

    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.clone()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Binds every tool to the shared context and hands it to the host.
    pub fn setup_handlers(&self, host: &mut dyn ToolHost, context: Arc<ToolContext>) {
        for tool in &self.tools {
            debug!(tool = tool.name(), "registering tool handler");
            host.register_tool(
                tool.definition(),
                Arc::new(BoundTool {
                    tool: tool.clone(),
                    context: context.clone(),
                }),
            );
        }
    }
}

struct BoundTool {
    tool: Arc<dyn Tool>,
    context: Arc<ToolContext>,
}

#[async_trait::async_trait]
impl ToolHandler for BoundTool {
    async fn call(&self, arguments: serde_json::Value) -> CallToolResult {
        self.tool.handle(arguments, &self.context).await
    }
}
