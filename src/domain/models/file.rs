use chrono::{DateTime, Utc};

/// A stored upload. Deliberately not `Serialize`: the payload must never
/// leak into a JSON response, so only payload-free DTOs cross the wire.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub payload: Vec<u8>,
}

impl FileRecord {
    pub fn new(id: String, original_name: String, mime_type: String, payload: Vec<u8>) -> Self {
        Self {
            id,
            original_name,
            mime_type,
            size: payload.len() as u64,
            uploaded_at: Utc::now(),
            payload,
        }
    }
}
