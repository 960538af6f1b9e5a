use crate::domain::error::DomainError;
use std::fmt;

pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6333";

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub qdrant_url: String,
    pub qdrant_api_key: Option<String>,
    pub default_collection: Option<String>,
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub embedding_model: Option<String>,
    /// Adds payload key listings to search results.
    pub debug_payloads: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAPI_API_KEY").or_else(|| get("OPENAI_API_KEY")).ok_or_else(|| {
            DomainError::Configuration("OpenAI API key is required (OPENAPI_API_KEY or OPENAI_API_KEY)".into())
        })?;

        Ok(Self {
            qdrant_url: get("QDRANT_URL").unwrap_or_else(|| DEFAULT_QDRANT_URL.to_string()),
            qdrant_api_key: get("QDRANT_API_KEY"),
            default_collection: get("COLLECTION_NAME"),
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL"),
            embedding_model: get("OPENAI_EMBEDDING_MODEL"),
            debug_payloads: get("DEBUG_QDRANT").is_some_and(|v| v != "0" && !v.eq_ignore_ascii_case("false")),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("qdrant_url", &self.qdrant_url)
            .field("qdrant_api_key", &self.qdrant_api_key.as_ref().map(|_| "<redacted>"))
            .field("default_collection", &self.default_collection)
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("embedding_model", &self.embedding_model)
            .field("debug_payloads", &self.debug_payloads)
            .finish()
    }
}
