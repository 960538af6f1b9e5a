//! Shared test helpers: in-memory fakes of both ports.

#![allow(dead_code)]

use qdrant_memory_mcp::domain::entities::collection::CollectionInfo;
use qdrant_memory_mcp::domain::entities::point::{Point, PointId, PointVector, ScrolledPoint, SearchResult};
use qdrant_memory_mcp::domain::error::DomainError;
use qdrant_memory_mcp::domain::ports::embedding_port::EmbeddingProvider;
use qdrant_memory_mcp::domain::ports::vector_store::VectorStore;
use qdrant_memory_mcp::domain::values::vectors_config::VectorsConfig;
use qdrant_memory_mcp::QdrantMemory;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Returns a fixed vector for every text and counts calls.
pub struct FakeEmbedder {
    vector: Vec<f32>,
    fail: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            fail: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            vector: vec![],
            fail: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail {
            return Err(DomainError::Embedding(message.clone()));
        }
        Ok(texts.iter().map(|_| self.vector.clone()).collect())
    }
}

#[derive(Default)]
struct Collection {
    config: Option<VectorsConfig>,
    points: Vec<Point>,
}

/// Collections kept in memory. Search scores every point by dot product and
/// returns them best first, the way the real store orders results.
#[derive(Default)]
pub struct FakeStore {
    collections: Mutex<BTreeMap<String, Collection>>,
    fail: Mutex<Option<String>>,
    /// Canned search results, returned instead of scoring when set.
    canned_results: Mutex<Option<Vec<SearchResult>>>,
    pub calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: &str) {
        *self.fail.lock().unwrap() = Some(message.to_string());
    }

    pub fn set_search_results(&self, results: Vec<SearchResult>) {
        *self.canned_results.lock().unwrap() = Some(results);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn points(&self, name: &str) -> Vec<Point> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .map(|c| c.points.clone())
            .unwrap_or_default()
    }

    pub fn vector_size(&self, name: &str) -> Option<usize> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .and_then(|c| match &c.config {
                Some(VectorsConfig::Single(params)) => Some(params.size),
                _ => None,
            })
    }

    fn enter(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail.lock().unwrap().as_ref() {
            Some(message) => Err(DomainError::Store(message.clone())),
            None => Ok(()),
        }
    }

    fn missing(name: &str) -> DomainError {
        DomainError::Store(format!("Not found: Collection `{name}` doesn't exist!"))
    }
}

#[async_trait::async_trait]
impl VectorStore for FakeStore {
    async fn create_collection(&self, name: &str, vector_size: usize) -> Result<(), DomainError> {
        self.enter()?;
        let mut collections = self.collections.lock().unwrap();
        collections.entry(name.to_string()).or_insert_with(|| Collection {
            config: Some(VectorsConfig::single(vector_size)),
            points: Vec::new(),
        });
        Ok(())
    }

    async fn create_collection_with_named_vectors(
        &self,
        name: &str,
        vectors: &BTreeMap<String, usize>,
    ) -> Result<(), DomainError> {
        self.enter()?;
        let mut collections = self.collections.lock().unwrap();
        collections.entry(name.to_string()).or_insert_with(|| Collection {
            config: Some(VectorsConfig::named(vectors.iter().map(|(n, s)| (n.clone(), *s)))),
            points: Vec::new(),
        });
        Ok(())
    }

    async fn upsert_points(&self, name: &str, points: &[Point]) -> Result<(), DomainError> {
        self.enter()?;
        let mut collections = self.collections.lock().unwrap();
        let collection = collections.get_mut(name).ok_or_else(|| Self::missing(name))?;
        for point in points {
            collection.points.retain(|p| p.id != point.id);
            collection.points.push(point.clone());
        }
        Ok(())
    }

    async fn search_points(
        &self,
        name: &str,
        query_vector: &[f32],
        limit: usize,
        _vector_name: Option<&str>,
    ) -> Result<Vec<SearchResult>, DomainError> {
        self.enter()?;
        if let Some(results) = self.canned_results.lock().unwrap().clone() {
            return Ok(results);
        }
        let collections = self.collections.lock().unwrap();
        let collection = collections.get(name).ok_or_else(|| Self::missing(name))?;
        let mut results: Vec<SearchResult> = collection
            .points
            .iter()
            .map(|p| SearchResult {
                id: p.id.clone(),
                score: match &p.vector {
                    PointVector::Dense(v) => v.iter().zip(query_vector).map(|(a, b)| (a * b) as f64).sum(),
                    PointVector::Named(_) => 0.0,
                },
                payload: p.payload.clone(),
            })
            .collect();
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(limit);
        Ok(results)
    }

    async fn scroll_points(&self, name: &str, limit: usize) -> Result<Vec<ScrolledPoint>, DomainError> {
        self.enter()?;
        let collections = self.collections.lock().unwrap();
        let collection = collections.get(name).ok_or_else(|| Self::missing(name))?;
        Ok(collection
            .points
            .iter()
            .take(limit)
            .map(|p| ScrolledPoint {
                id: p.id.clone(),
                payload: p.payload.clone(),
            })
            .collect())
    }

    async fn collection_info(&self, name: &str) -> Result<CollectionInfo, DomainError> {
        self.enter()?;
        let collections = self.collections.lock().unwrap();
        let collection = collections.get(name).ok_or_else(|| Self::missing(name))?;
        let info = json!({
            "status": "green",
            "points_count": collection.points.len(),
            "segments_count": 1,
            "config": {"params": {"vectors": collection.config}},
        });
        serde_json::from_value(info).map_err(DomainError::from)
    }
}

pub fn search_hit(id: u64, score: f64, information: &str) -> SearchResult {
    let mut payload = serde_json::Map::new();
    payload.insert("information".into(), json!(information));
    SearchResult {
        id: PointId::Num(id),
        score,
        payload,
    }
}

pub fn setup(default_collection: Option<&str>) -> (QdrantMemory, Arc<FakeStore>, Arc<FakeEmbedder>) {
    let store = Arc::new(FakeStore::new());
    let embedder = Arc::new(FakeEmbedder::new(vec![0.1, 0.2, 0.3]));
    let memory = QdrantMemory::with_providers(
        store.clone(),
        embedder.clone(),
        default_collection.map(str::to_string),
    );
    (memory, store, embedder)
}
