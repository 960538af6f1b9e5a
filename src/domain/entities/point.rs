use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque key-value data attached to a point.
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Text(String),
}

impl PointId {
    /// Random UUID v4, safe under concurrent writers.
    pub fn random() -> Self {
        PointId::Text(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Num(n) => write!(f, "{n}"),
            PointId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for PointId {
    fn from(n: u64) -> Self {
        PointId::Num(n)
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        PointId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointVector {
    Dense(Vec<f32>),
    Named(BTreeMap<String, Vec<f32>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub vector: PointVector,
    pub payload: Payload,
}

impl Point {
    pub fn new(id: PointId, vector: Vec<f32>, payload: Payload) -> Self {
        Self {
            id,
            vector: PointVector::Dense(vector),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: PointId,
    #[serde(default)]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payload: Payload,
}

/// A point as returned by scroll, without its vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrolledPoint {
    pub id: PointId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payload: Payload,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Payload, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Payload>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_id_accepts_numbers_and_strings() {
        let ids: Vec<PointId> = serde_json::from_value(json!([7, "abc"])).unwrap();
        assert_eq!(ids, vec![PointId::Num(7), PointId::Text("abc".into())]);
        assert_eq!(ids[0].to_string(), "7");
    }

    #[test]
    fn random_ids_are_uuids_and_distinct() {
        let a = PointId::random();
        let b = PointId::random();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a.to_string()).is_ok());
    }

    #[test]
    fn point_serializes_dense_vector_under_vector_key() {
        let mut payload = Payload::new();
        payload.insert("information".into(), json!("hi"));
        let point = Point::new(PointId::Num(1), vec![0.5, 1.0], payload);
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({"id": 1, "vector": [0.5, 1.0], "payload": {"information": "hi"}})
        );
    }

    #[test]
    fn search_result_tolerates_null_or_missing_payload() {
        let r: SearchResult = serde_json::from_value(json!({"id": 1, "score": 0.5, "payload": null})).unwrap();
        assert!(r.payload.is_empty());
        let r: SearchResult = serde_json::from_value(json!({"id": "x", "score": 0.1})).unwrap();
        assert!(r.payload.is_empty());
    }
}
