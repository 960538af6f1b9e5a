use crate::domain::entities::collection::CollectionInfo;
use crate::domain::entities::point::{Point, ScrolledPoint, SearchResult};
use crate::domain::error::DomainError;
use std::collections::BTreeMap;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;
pub const DEFAULT_SCROLL_LIMIT: usize = 10_000;

#[async_trait::async_trait]
pub trait VectorStore: Send + Sync {
    /// Idempotent: an already existing collection is not an error.
    async fn create_collection(&self, name: &str, vector_size: usize) -> Result<(), DomainError>;

    async fn create_collection_with_named_vectors(
        &self,
        name: &str,
        vectors: &BTreeMap<String, usize>,
    ) -> Result<(), DomainError>;

    async fn upsert_points(&self, name: &str, points: &[Point]) -> Result<(), DomainError>;

    async fn search_points(
        &self,
        name: &str,
        query_vector: &[f32],
        limit: usize,
        vector_name: Option<&str>,
    ) -> Result<Vec<SearchResult>, DomainError>;

    /// First page only, vectors excluded.
    async fn scroll_points(&self, name: &str, limit: usize) -> Result<Vec<ScrolledPoint>, DomainError>;

    async fn collection_info(&self, name: &str) -> Result<CollectionInfo, DomainError>;

    async fn scroll_all_points(&self, name: &str) -> Result<Vec<ScrolledPoint>, DomainError> {
        self.scroll_points(name, DEFAULT_SCROLL_LIMIT).await
    }
}
