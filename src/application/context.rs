use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

/// Shared, read-only state every tool invocation runs against.
pub struct ToolContext {
    pub store: Arc<dyn VectorStore>,
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub default_collection: Option<String>,
    pub debug_payloads: bool,
}

impl ToolContext {
    pub fn new(
        store: Arc<dyn VectorStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        default_collection: Option<String>,
    ) -> Self {
        Self {
            store,
            embedder,
            default_collection: default_collection.filter(|c| !c.is_empty()),
            debug_payloads: false,
        }
    }

    pub fn with_debug_payloads(mut self, enabled: bool) -> Self {
        self.debug_payloads = enabled;
        self
    }

    /// The configured default wins over the caller's argument; with neither
    /// the invocation cannot proceed.
    pub fn resolve_collection<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str, DomainError> {
        self.default_collection
            .as_deref()
            .or(requested.filter(|c| !c.is_empty()))
            .ok_or_else(DomainError::collection_required)
    }
}
