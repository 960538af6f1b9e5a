use super::{object_schema, requested_collection, CollectionArg, Tool};
use crate::application::context::ToolContext;
use crate::domain::entities::collection::CollectionInfo;
use crate::domain::entities::point::ScrolledPoint;
use crate::domain::entities::tool::Content;
use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde_json::{Map, Value};

pub const NAME: &str = "memory-debug";
pub const SAMPLE_SIZE: usize = 5;

/// Read-only view of a collection's layout and a few sample payloads.
pub struct MemoryDebugTool {
    collection: CollectionArg,
}

impl MemoryDebugTool {
    pub fn new(collection: CollectionArg) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl Tool for MemoryDebugTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Debug/inspection tool for memory collections. Use only when you need to understand the index \
         structure or sample stored points (schema, payload keys, example payloads) for troubleshooting \
         or explaining the memory layout."
    }

    fn input_schema(&self) -> Value {
        object_schema(
            self.collection,
            "Name of the memory collection to inspect and debug (for diagnostics, not for normal QA).",
            Map::new(),
            Vec::new(),
        )
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<Vec<Content>, DomainError> {
        let collection = ctx.resolve_collection(requested_collection(&args))?;

        let info = ctx.store.collection_info(collection).await?;
        let samples = ctx.store.scroll_points(collection, SAMPLE_SIZE).await?;

        Ok(vec![Content::text(render(collection, &info, &samples)?)])
    }
}

fn render(collection: &str, info: &CollectionInfo, samples: &[ScrolledPoint]) -> Result<String, DomainError> {
    let mut out = format!("Collection Info for \"{collection}\":\n");
    out.push_str(&serde_json::to_string_pretty(info)?);
    out.push_str(&format!("\n\nSample Data (first {} points):\n", samples.len()));

    for (i, point) in samples.iter().enumerate() {
        let mut keys: Vec<&str> = point.payload.keys().map(String::as_str).collect();
        keys.sort_unstable();
        out.push_str(&format!("\n--- Point {} (ID: {}) ---\n", i + 1, point.id));
        out.push_str(&format!("Payload keys: {}\n", keys.join(", ")));
        out.push_str(&format!("Payload: {}\n", serde_json::to_string_pretty(&point.payload)?));
    }
    Ok(out)
}
