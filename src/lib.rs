pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::context::ToolContext;
use crate::application::registry::ToolRegistry;
use crate::config::Config;
use crate::domain::entities::tool::{CallToolResult, ToolDefinition};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::mcp::McpServer;
use crate::infrastructure::qdrant::QdrantHttpClient;
use std::sync::Arc;

pub const SERVER_NAME: &str = "qdrant-mcp-server";

/// Memory tools over a vector store, ready to be served or called directly.
pub struct QdrantMemory {
    registry: ToolRegistry,
    context: Arc<ToolContext>,
}

impl QdrantMemory {
    pub fn new(config: &Config) -> Self {
        let store: Arc<dyn VectorStore> = Arc::new(QdrantHttpClient::new(
            config.qdrant_url.clone(),
            config.qdrant_api_key.clone(),
        ));
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OpenAiProvider::new(
            config.openai_api_key.clone(),
            config.embedding_model.clone(),
            config.openai_base_url.clone(),
        ));
        let context = ToolContext::new(store, embedder, config.default_collection.clone())
            .with_debug_payloads(config.debug_payloads);
        Self::with_context(context)
    }

    pub fn with_providers(
        store: Arc<dyn VectorStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        default_collection: Option<String>,
    ) -> Self {
        Self::with_context(ToolContext::new(store, embedder, default_collection))
    }

    pub fn with_context(context: ToolContext) -> Self {
        Self {
            registry: ToolRegistry::create(context.default_collection.as_deref()),
            context: Arc::new(context),
        }
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<CallToolResult, DomainError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown tool: {name}")))?;
        Ok(tool.handle(arguments, &self.context).await)
    }

    /// An MCP server with every tool bound to the shared context.
    pub fn into_server(self) -> McpServer {
        let mut server = McpServer::new(SERVER_NAME, env!("CARGO_PKG_VERSION"));
        self.registry.setup_handlers(&mut server, self.context);
        server
    }
}
