pub mod distance;
pub mod query_vector;
pub mod vectors_config;
