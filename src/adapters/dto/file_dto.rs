use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::file::FileRecord;

/// Payload-free view of a stored file. The `url` is derived from the
/// current request's host headers at read time, never persisted.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub id: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub size: u64,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    pub url: String,
}

impl FileSummary {
    pub fn from_record(record: &FileRecord, base_url: &str) -> Self {
        Self {
            id: record.id.clone(),
            original_name: record.original_name.clone(),
            mime_type: record.mime_type.clone(),
            size: record.size,
            uploaded_at: record.uploaded_at,
            url: format!("{}/file/{}", base_url, record.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadFileResponse {
    pub success: bool,
    pub message: String,
    pub file: FileSummary,
}

#[derive(Debug, Serialize)]
pub struct FileInfoResponse {
    pub success: bool,
    pub file: FileSummary,
}

#[derive(Debug, Serialize)]
pub struct ListFilesResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub message: String,
}
