use super::distance::Distance;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One vector space. Fields beyond size and distance (`on_disk`,
/// `hnsw_config`, `datatype`, ...) are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorParams {
    pub size: usize,
    pub distance: Distance,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VectorParams {
    pub fn cosine(size: usize) -> Self {
        Self {
            size,
            distance: Distance::Cosine,
            extra: Map::new(),
        }
    }
}

/// Vector configuration of a collection: one unnamed vector space, or
/// several named ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorsConfig {
    Single(VectorParams),
    Named(BTreeMap<String, VectorParams>),
}

impl VectorsConfig {
    pub fn single(size: usize) -> Self {
        VectorsConfig::Single(VectorParams::cosine(size))
    }

    /// Every named space defaults to cosine distance.
    pub fn named<I, S>(sizes: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        VectorsConfig::Named(
            sizes
                .into_iter()
                .map(|(name, size)| (name.into(), VectorParams::cosine(size)))
                .collect(),
        )
    }
}
