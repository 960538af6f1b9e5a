use super::wire::{
    describe_error_body, ApiResponse, CreateCollectionRequest, ScrollRequest, ScrollResult, SearchRequest,
    UpsertRequest,
};
use crate::domain::entities::collection::CollectionInfo;
use crate::domain::entities::point::{Point, ScrolledPoint, SearchResult};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::query_vector::QueryVector;
use crate::domain::values::vectors_config::VectorsConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const VECTOR_NAME_HINT: &str = ". Hint: Try setting a vector name (e.g., \"dense\")";

/// Typed façade over the Qdrant REST API.
pub struct QdrantHttpClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl QdrantHttpClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{endpoint}", self.base_url))
            .header(CONTENT_TYPE, "application/json");
        match &self.api_key {
            Some(key) => builder.header("api-key", key),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, action: &str) -> Result<Response, DomainError> {
        builder
            .send()
            .await
            .map_err(|e| DomainError::Store(format!("Failed to {action}: {e}")))
    }

    async fn put_collection(&self, name: &str, vectors: &VectorsConfig) -> Result<(), DomainError> {
        debug!(collection = name, "creating collection");
        let builder = self
            .request(Method::PUT, &format!("/collections/{name}"))
            .json(&CreateCollectionRequest { vectors });
        let resp = self.send(builder, "create collection").await?;

        let status = resp.status();
        if status == StatusCode::CONFLICT {
            debug!(collection = name, "collection already exists");
            return Ok(());
        }
        if !status.is_success() {
            return Err(DomainError::Store(format!(
                "Failed to create collection: {}",
                status_text(status)
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl VectorStore for QdrantHttpClient {
    async fn create_collection(&self, name: &str, vector_size: usize) -> Result<(), DomainError> {
        self.put_collection(name, &VectorsConfig::single(vector_size)).await
    }

    async fn create_collection_with_named_vectors(
        &self,
        name: &str,
        vectors: &BTreeMap<String, usize>,
    ) -> Result<(), DomainError> {
        let config = VectorsConfig::named(vectors.iter().map(|(n, size)| (n.clone(), *size)));
        self.put_collection(name, &config).await
    }

    async fn upsert_points(&self, name: &str, points: &[Point]) -> Result<(), DomainError> {
        debug!(collection = name, points = points.len(), "upserting points");
        let builder = self
            .request(Method::PUT, &format!("/collections/{name}/points"))
            .json(&UpsertRequest { points });
        let resp = self.send(builder, "upsert points").await?;

        if !resp.status().is_success() {
            let detail = failure_detail(resp).await;
            return Err(DomainError::Store(format!(
                "Failed to upsert points in collection '{name}': {detail}"
            )));
        }
        Ok(())
    }

    async fn search_points(
        &self,
        name: &str,
        query_vector: &[f32],
        limit: usize,
        vector_name: Option<&str>,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let vector = QueryVector::new(query_vector.to_vec(), vector_name);
        debug!(collection = name, limit, named = vector.is_named(), "searching points");
        let builder = self
            .request(Method::POST, &format!("/collections/{name}/points/search"))
            .json(&SearchRequest {
                vector: &vector,
                limit,
                with_payload: true,
            });
        let resp = self.send(builder, "search points").await?;

        if !resp.status().is_success() {
            let mut detail = failure_detail(resp).await;
            if detail.contains("requires specified vector name") && vector_name.is_none() {
                detail.push_str(VECTOR_NAME_HINT);
            }
            return Err(DomainError::Store(format!(
                "Failed to search points in collection '{name}': {detail}"
            )));
        }

        let body: ApiResponse<Vec<SearchResult>> = resp
            .json()
            .await
            .map_err(|e| DomainError::Decode(format!("search response: {e}")))?;
        Ok(body.result.unwrap_or_default())
    }

    async fn scroll_points(&self, name: &str, limit: usize) -> Result<Vec<ScrolledPoint>, DomainError> {
        debug!(collection = name, limit, "scrolling points");
        let builder = self
            .request(Method::POST, &format!("/collections/{name}/points/scroll"))
            .json(&ScrollRequest {
                limit,
                with_payload: true,
                with_vector: false,
            });
        let resp = self.send(builder, "get points").await?;

        if !resp.status().is_success() {
            let detail = failure_detail(resp).await;
            return Err(DomainError::Store(format!(
                "Failed to get points from collection '{name}': {detail}"
            )));
        }

        let body: ApiResponse<ScrollResult> = resp
            .json()
            .await
            .map_err(|e| DomainError::Decode(format!("scroll response: {e}")))?;
        let Some(page) = body.result else {
            return Ok(Vec::new());
        };
        if let Some(offset) = &page.next_page_offset {
            debug!(collection = name, %offset, "more points available beyond first page");
        }
        Ok(page.points)
    }

    async fn collection_info(&self, name: &str) -> Result<CollectionInfo, DomainError> {
        let builder = self.request(Method::GET, &format!("/collections/{name}"));
        let resp = self.send(builder, "get collection info").await?;

        if !resp.status().is_success() {
            let detail = failure_detail(resp).await;
            return Err(DomainError::Store(format!(
                "Failed to get collection info for '{name}': {detail}"
            )));
        }

        let body: ApiResponse<CollectionInfo> = resp
            .json()
            .await
            .map_err(|e| DomainError::Decode(format!("collection info response: {e}")))?;
        body.result
            .ok_or_else(|| DomainError::Decode(format!("collection info for '{name}' has no result")))
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Structured message, then raw body, then status text.
async fn failure_detail(resp: Response) -> String {
    let status = resp.status();
    let fallback = status_text(status);
    match resp.text().await {
        Ok(body) => describe_error_body(&body).unwrap_or(fallback),
        Err(e) => {
            warn!(%status, "could not read error body: {e}");
            fallback
        }
    }
}
