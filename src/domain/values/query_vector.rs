use serde::Serialize;

/// Query vector of a similarity search. Serializes to a bare array for the
/// default space, or to `{name, vector}` to select a named space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryVector {
    Default(Vec<f32>),
    Named { name: String, vector: Vec<f32> },
}

impl QueryVector {
    pub fn new(vector: Vec<f32>, vector_name: Option<&str>) -> Self {
        match vector_name {
            Some(name) => QueryVector::Named {
                name: name.to_string(),
                vector,
            },
            None => QueryVector::Default(vector),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, QueryVector::Named { .. })
    }
}
