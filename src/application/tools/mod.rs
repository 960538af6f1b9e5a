//! Tool contracts exposed to the agent.

pub mod memory_debug;
pub mod memory_search;
pub mod memory_store;

use crate::application::context::ToolContext;
use crate::domain::entities::tool::{CallToolResult, Content, ToolDefinition};
use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

pub use memory_debug::MemoryDebugTool;
pub use memory_search::MemorySearchTool;
pub use memory_store::MemoryStoreTool;

/// Whether callers must name the collection, or a server-wide default
/// stands in for it. Chosen once, when the registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionArg {
    Required,
    Defaulted,
}

impl CollectionArg {
    pub fn for_default(default_collection: Option<&str>) -> Self {
        match default_collection {
            Some(c) if !c.is_empty() => CollectionArg::Defaulted,
            _ => CollectionArg::Required,
        }
    }
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON Schema of the accepted arguments.
    fn input_schema(&self) -> Value;

    /// Runs the contract. Errors are rendered by [`Tool::handle`].
    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<Vec<Content>, DomainError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }

    async fn handle(&self, args: Value, ctx: &ToolContext) -> CallToolResult {
        debug!(tool = self.name(), "invoking tool");
        match self.execute(args, ctx).await {
            Ok(content) => CallToolResult::success(content),
            Err(e) => {
                warn!(tool = self.name(), "tool failed: {e}");
                CallToolResult::error(e)
            }
        }
    }
}

/// Builds an object schema, adding a required `collection_name` property
/// for the [`CollectionArg::Required`] variant.
pub(crate) fn object_schema(
    collection: CollectionArg,
    collection_description: &str,
    mut properties: Map<String, Value>,
    mut required: Vec<&'static str>,
) -> Value {
    if collection == CollectionArg::Required {
        properties.insert(
            "collection_name".into(),
            json!({"type": "string", "description": collection_description}),
        );
        required.push("collection_name");
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// The caller's `collection_name`, if any, read before the rest of the
/// arguments are validated.
pub(crate) fn requested_collection(args: &Value) -> Option<&str> {
    args.get("collection_name").and_then(Value::as_str)
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, DomainError> {
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| DomainError::InvalidInput(e.to_string()))
}
