pub mod embedding_port;
pub mod tool_host;
pub mod vector_store;
