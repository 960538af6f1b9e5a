mod common;

use common::{FakeEmbedder, FakeStore};
use qdrant_memory_mcp::application::context::ToolContext;
use qdrant_memory_mcp::application::registry::ToolRegistry;
use qdrant_memory_mcp::domain::entities::tool::ToolDefinition;
use qdrant_memory_mcp::domain::ports::tool_host::{ToolHandler, ToolHost};
use serde_json::json;
use std::sync::Arc;

#[derive(Default)]
struct RecordingHost {
    tools: Vec<(ToolDefinition, Arc<dyn ToolHandler>)>,
}

impl ToolHost for RecordingHost {
    fn register_tool(&mut self, definition: ToolDefinition, handler: Arc<dyn ToolHandler>) {
        self.tools.push((definition, handler));
    }
}

fn context(default_collection: Option<&str>) -> (Arc<ToolContext>, Arc<FakeStore>) {
    let store = Arc::new(FakeStore::new());
    let ctx = ToolContext::new(
        store.clone(),
        Arc::new(FakeEmbedder::new(vec![1.0, 0.0])),
        default_collection.map(str::to_string),
    );
    (Arc::new(ctx), store)
}

#[test]
fn test_standard_tools_in_order() {
    let registry = ToolRegistry::create(None);
    let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["memory-store", "memory-search", "memory-debug"]);
}

#[test]
fn test_schemas_require_collection_without_default() {
    let registry = ToolRegistry::create(None);
    for def in registry.definitions() {
        assert_eq!(def.input_schema["type"], "object");
        assert!(def.input_schema["properties"].get("collection_name").is_some(), "{}", def.name);
        let required = def.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("collection_name")), "{}", def.name);
    }
}

#[test]
fn test_schemas_omit_collection_with_default() {
    let registry = ToolRegistry::create(Some("memos"));
    for def in registry.definitions() {
        assert!(def.input_schema["properties"].get("collection_name").is_none(), "{}", def.name);
        let required = def.input_schema["required"].as_array().unwrap();
        assert!(!required.contains(&json!("collection_name")), "{}", def.name);
    }
}

#[test]
fn test_schemas_mark_content_arguments_required() {
    let registry = ToolRegistry::create(Some("memos"));
    let defs = registry.definitions();
    assert_eq!(defs[0].input_schema["required"], json!(["information"]));
    assert_eq!(defs[1].input_schema["required"], json!(["query"]));
    assert_eq!(defs[1].input_schema["properties"]["limit"]["type"], "integer");
    assert_eq!(defs[2].input_schema["required"], json!([]));
}

#[test]
fn test_definition_serializes_input_schema_in_camel_case() {
    let registry = ToolRegistry::create(None);
    let value = serde_json::to_value(&registry.definitions()[0]).unwrap();
    assert!(value.get("inputSchema").is_some());
    assert!(value.get("input_schema").is_none());
}

#[test]
fn test_empty_default_behaves_as_absent() {
    let registry = ToolRegistry::create(Some(""));
    let def = &registry.definitions()[0];
    assert!(def.input_schema["properties"].get("collection_name").is_some());
}

#[test]
fn test_tools_returns_a_copy() {
    let registry = ToolRegistry::create(None);
    let mut tools = registry.tools();
    tools.clear();
    assert_eq!(registry.tools().len(), 3);
}

#[test]
fn test_get_finds_by_name() {
    let registry = ToolRegistry::create(None);
    assert_eq!(registry.get("memory-search").map(|t| t.name()), Some("memory-search"));
    assert!(registry.get("memory-delete").is_none());
}

#[tokio::test]
async fn test_setup_handlers_binds_every_tool_to_context() {
    let registry = ToolRegistry::create(Some("memos"));
    let (ctx, store) = context(Some("memos"));
    let mut host = RecordingHost::default();

    registry.setup_handlers(&mut host, ctx);

    let names: Vec<&str> = host.tools.iter().map(|(d, _)| d.name.as_str()).collect();
    assert_eq!(names, vec!["memory-store", "memory-search", "memory-debug"]);

    let (_, store_handler) = &host.tools[0];
    let result = store_handler.call(json!({"information": "bound"})).await;
    assert!(!result.is_error, "{}", result.text());
    assert_eq!(store.points("memos").len(), 1);

    let (_, search_handler) = &host.tools[1];
    let result = search_handler.call(json!({"query": "bound"})).await;
    assert!(result.text().starts_with("Result 1 (Score: "));
}

#[tokio::test]
async fn test_bound_handler_renders_failures() {
    let registry = ToolRegistry::create(None);
    let (ctx, store) = context(None);
    let mut host = RecordingHost::default();
    registry.setup_handlers(&mut host, ctx);

    let (_, debug_handler) = &host.tools[2];
    let result = debug_handler.call(json!({})).await;

    assert!(result.is_error);
    assert_eq!(result.text(), "Error: Collection name is required");
    assert_eq!(store.call_count(), 0);
}
