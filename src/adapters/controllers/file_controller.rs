use axum::{
    body::Body,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::Response,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        dto::file_dto::{
            DeleteFileResponse, FileInfoResponse, FileSummary, ListFilesResponse,
            UploadFileResponse,
        },
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::file::FileRecord,
};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Base URL for the record `url` field, rebuilt on every request from the
/// proxy headers. Untrusted input, cosmetic use only.
fn request_base_url(headers: &HeaderMap) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("http");

    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(header::HOST))
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("localhost");

    format!("{}://{}", proto, host)
}

/// The original name is display-only and goes into a quoted header value,
/// so strip control characters and the quotes themselves.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '"' { '\'' } else { c })
        .collect()
}

/// A body rejected by the request size limit surfaces through the multipart
/// reader as a 413; report it with the same code as an oversized file field.
fn map_multipart_error(err: MultipartError, limit: u64) -> ApplicationError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Request body exceeded the configured limit: {}", err);
        ApplicationError::FileTooLarge { limit }
    } else {
        ApplicationError::UploadFailed(err.to_string())
    }
}

pub struct FileController;

impl FileController {
    /// POST /upload
    /// Multipart body with a single file in the "file" field.
    pub async fn upload_file(
        State(app_state): State<AppState>,
        headers: HeaderMap,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<UploadFileResponse>, ApplicationError> {
        // A non-multipart body carries no file; report it through the same
        // JSON envelope as every other client error.
        let mut multipart = multipart.map_err(|e| {
            warn!("Upload request is not valid multipart: {}", e);
            ApplicationError::NoFile
        })?;

        let limit = app_state.limits.max_file_size;

        let mut file_bytes: Option<Vec<u8>> = None;
        let mut original_name: Option<String> = None;
        let mut mime_type: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| map_multipart_error(e, limit))?
        {
            if field.name() != Some("file") {
                continue;
            }

            original_name = field.file_name().map(|s| s.to_string());
            mime_type = field.content_type().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| map_multipart_error(e, limit))?;
            file_bytes = Some(bytes.to_vec());

            // Single-file endpoint: only the first "file" field counts.
            break;
        }

        let file_bytes = file_bytes.ok_or_else(|| {
            warn!("Upload request missing the 'file' field");
            ApplicationError::NoFile
        })?;

        if file_bytes.len() as u64 > limit {
            return Err(ApplicationError::FileTooLarge { limit });
        }

        let record = FileRecord::new(
            Uuid::new_v4().simple().to_string(),
            original_name.unwrap_or_else(|| "file".to_string()),
            mime_type.unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            file_bytes,
        );

        info!(
            "Storing file {} ({}, {} bytes)",
            record.id, record.original_name, record.size
        );

        let summary = FileSummary::from_record(&record, &request_base_url(&headers));
        app_state.file_store.put(record).await?;

        Ok(Json(UploadFileResponse {
            success: true,
            message: "File uploaded successfully".to_string(),
            file: summary,
        }))
    }

    /// GET /file/{id}
    pub async fn download_file(
        State(app_state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Response, ApplicationError> {
        let record = app_state
            .file_store
            .get(&id)
            .await?
            .ok_or(ApplicationError::FileNotFound)?;

        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, record.mime_type)
            .header(header::CONTENT_LENGTH, record.size)
            .header(
                header::CONTENT_DISPOSITION,
                format!(
                    "inline; filename=\"{}\"",
                    sanitize_filename(&record.original_name)
                ),
            )
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(record.payload))
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        Ok(response)
    }

    /// GET /info/{id}
    pub async fn get_file_info(
        State(app_state): State<AppState>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Json<FileInfoResponse>, ApplicationError> {
        let record = app_state
            .file_store
            .get(&id)
            .await?
            .ok_or(ApplicationError::FileNotFound)?;

        Ok(Json(FileInfoResponse {
            success: true,
            file: FileSummary::from_record(&record, &request_base_url(&headers)),
        }))
    }

    /// GET /files
    pub async fn list_files(
        State(app_state): State<AppState>,
        headers: HeaderMap,
    ) -> Result<Json<ListFilesResponse>, ApplicationError> {
        let base_url = request_base_url(&headers);
        let records = app_state.file_store.list_all().await?;

        let files: Vec<FileSummary> = records
            .iter()
            .map(|record| FileSummary::from_record(record, &base_url))
            .collect();

        Ok(Json(ListFilesResponse {
            success: true,
            count: files.len(),
            files,
        }))
    }

    /// DELETE /file/{id}
    pub async fn delete_file(
        State(app_state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<DeleteFileResponse>, ApplicationError> {
        let removed = app_state.file_store.delete(&id).await?;
        if !removed {
            return Err(ApplicationError::FileNotFound);
        }

        info!("Deleted file {}", id);

        Ok(Json(DeleteFileResponse {
            success: true,
            message: "File deleted successfully".to_string(),
        }))
    }
}
