pub mod embeddings;
pub mod mcp;
pub mod qdrant;
