use super::{object_schema, parse_args, requested_collection, CollectionArg, Tool};
use crate::application::context::ToolContext;
use crate::domain::entities::point::SearchResult;
use crate::domain::entities::tool::Content;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::DEFAULT_SEARCH_LIMIT;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

pub const NAME: &str = "memory-search";

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    limit: Option<usize>,
}

/// Semantic lookup over previously stored memories.
pub struct MemorySearchTool {
    collection: CollectionArg,
}

impl MemorySearchTool {
    pub fn new(collection: CollectionArg) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl Tool for MemorySearchTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Retrieve relevant information previously stored in vector memory using semantic (dense) search. \
         Use this as a memory lookup to fetch past notes, facts, or documents related to the current query."
    }

    fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            "query".into(),
            json!({
                "type": "string",
                "description": "Natural language query describing what previously stored information you want \
                    to retrieve (e.g. \"user preferences about notifications\", \"project X architecture notes\")."
            }),
        );
        properties.insert(
            "limit".into(),
            json!({
                "type": "integer",
                "minimum": 1,
                "default": DEFAULT_SEARCH_LIMIT,
                "description": "Maximum number of results to return. Default: 5. Increase only if you truly need \
                    more context, to avoid overwhelming the conversation."
            }),
        );
        object_schema(
            self.collection,
            "Name of the memory collection to search in. Must match the collection where the information was stored.",
            properties,
            vec!["query"],
        )
    }

    async fn execute(&self, args: Value, ctx: &ToolContext) -> Result<Vec<Content>, DomainError> {
        let collection = ctx.resolve_collection(requested_collection(&args))?.to_string();
        let args: SearchArgs = parse_args(args)?;
        let limit = args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit == 0 {
            return Err(DomainError::InvalidInput("limit must be at least 1".into()));
        }

        let vector = ctx.embedder.embed_one(&args.query).await?;
        let results = ctx.store.search_points(&collection, &vector, limit, None).await?;
        debug!(collection = %collection, hits = results.len(), "search finished");

        if results.is_empty() {
            return Ok(vec![Content::text(format!(
                "No relevant information found for query: \"{}\"",
                args.query
            ))]);
        }

        results
            .iter()
            .enumerate()
            .map(|(i, result)| render_result(i + 1, result, ctx.debug_payloads).map(Content::text))
            .collect()
    }
}

fn render_result(rank: usize, result: &SearchResult, show_keys: bool) -> Result<String, DomainError> {
    let mut text = format!("Result {rank} (Score: {:.4}):\n", result.score);
    if show_keys {
        let keys: Vec<&str> = result.payload.keys().map(String::as_str).collect();
        text.push_str(&format!("Debug - Payload keys: {}\n", keys.join(", ")));
    }
    text.push_str(&format!("Detail: {}\n", serde_json::to_string(&result.payload)?));
    Ok(text)
}
