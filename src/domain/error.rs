use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Required input (collection name, API key) is missing.
    #[error("{0}")]
    Configuration(String),

    /// Non-success response from the vector store.
    #[error("{0}")]
    Store(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl DomainError {
    pub fn collection_required() -> Self {
        DomainError::Configuration("Collection name is required".to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Transport(e.to_string())
    }
}
