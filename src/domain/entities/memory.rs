use super::point::Payload;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Payload written for every stored memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryPayload {
    pub information: String,
    pub stored_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Payload>,
}

impl MemoryPayload {
    pub fn new(information: String, metadata: Option<Payload>) -> Self {
        Self {
            information,
            stored_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            metadata,
        }
    }

    pub fn into_payload(self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("information".into(), self.information.into());
        payload.insert("stored_at".into(), self.stored_at.into());
        if let Some(metadata) = self.metadata {
            payload.insert("metadata".into(), metadata.into());
        }
        payload
    }
}
