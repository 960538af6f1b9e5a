//! Request and response bodies of the Qdrant REST API.

use crate::domain::entities::point::{Point, PointId, ScrolledPoint};
use crate::domain::values::query_vector::QueryVector;
use crate::domain::values::vectors_config::VectorsConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub(crate) struct CreateCollectionRequest<'a> {
    pub vectors: &'a VectorsConfig,
}

#[derive(Serialize)]
pub(crate) struct UpsertRequest<'a> {
    pub points: &'a [Point],
}

#[derive(Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub vector: &'a QueryVector,
    pub limit: usize,
    pub with_payload: bool,
}

#[derive(Serialize)]
pub(crate) struct ScrollRequest {
    pub limit: usize,
    pub with_payload: bool,
    pub with_vector: bool,
}

/// Envelope every Qdrant response is wrapped in.
#[derive(Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub result: Option<T>,
}

#[derive(Deserialize)]
pub(crate) struct ScrollResult {
    #[serde(default)]
    pub points: Vec<ScrolledPoint>,
    #[serde(default)]
    pub next_page_offset: Option<PointId>,
}

/// Best message available from an error body.
///
/// Returns the structured message when present (`{error: {message}}`, or
/// Qdrant's own `{status: {error}}`), the raw JSON when the body decodes but
/// carries no message, and `None` when the body is empty or not JSON so the
/// caller falls back to the status text.
pub(crate) fn describe_error_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let message = value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| value.pointer("/status/error").and_then(Value::as_str))
        .filter(|m| !m.is_empty());
    Some(match message {
        Some(m) => m.to_string(),
        None => value.to_string(),
    })
}
