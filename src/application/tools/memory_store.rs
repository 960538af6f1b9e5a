use super::{object_schema, parse_args, requested_collection, CollectionArg, Tool};
use crate::application::context::ToolContext;
use crate::domain::entities::memory::MemoryPayload;
use crate::domain::entities::point::{Payload, Point, PointId};
use crate::domain::entities::tool::Content;
use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

pub const NAME: &str = "memory-store";

#[derive(Deserialize)]
struct StoreArgs {
    information: String,
    #[serde(default)]
    metadata: Option<Payload>,
}

/// Embeds a piece of text and stores it as a new point.
pub struct MemoryStoreTool {
    collection: CollectionArg,
}

impl MemoryStoreTool {
    pub fn new(collection: CollectionArg) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl Tool for MemoryStoreTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Store long-term textual information in the underlying vector memory store. \
         Use this when you want the assistant to remember something for future retrieval \
         (not for immediate reasoning). Automatically embeds the text and returns the stored ID."
    }

    fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            "information".into(),
            json!({
                "type": "string",
                "description": "The main text content you want to store as long-term memory \
                    (e.g. notes, facts, documentation snippets). Use clear, self-contained sentences."
            }),
        );
        properties.insert(
            "metadata".into(),
            json!({
                "type": "object",
                "additionalProperties": true,
                "description": "Optional JSON metadata describing this information, such as \
                    {\"source\": \"docs\", \"url\": \"...\", \"tags\": [\"project\", \"user-pref\"]}. \
                    Include anything that helps future filtering."
            }),
        );
        object_schema(
            self.collection,
            "Name of the memory collection to store this information in. If you are unsure, \
             ask the user or use a general-purpose collection name (e.g. \"long_term_memory\").",
            properties,
            vec!["information"],
        )
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<Vec<Content>, DomainError> {
        let collection = ctx.resolve_collection(requested_collection(&args))?.to_string();
        let args: StoreArgs = parse_args(args)?;

        let embedding = ctx.embedder.embed_one(&args.information).await?;
        ctx.store.create_collection(&collection, embedding.len()).await?;

        let id = PointId::random();
        let payload = MemoryPayload::new(args.information, args.metadata).into_payload();
        ctx.store
            .upsert_points(&collection, &[Point::new(id.clone(), embedding, payload)])
            .await?;

        info!(collection = %collection, %id, "stored memory");
        Ok(vec![Content::text(format!(
            "Information stored successfully in collection '{collection}' with ID: {id}"
        ))])
    }
}
