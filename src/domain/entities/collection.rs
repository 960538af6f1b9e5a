use crate::domain::values::vectors_config::VectorsConfig;
use serde::{Deserialize, Serialize};

/// Collection metadata as reported by `GET /collections/{name}`.
///
/// Only the fields the debug view relies on are typed; everything else the
/// store reports is carried through `extra` so nothing is lost on render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CollectionConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub params: CollectionParams,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionParams {
    pub vectors: VectorsConfig,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
