use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApplicationError::NoFile => {
                warn!("Upload request without a 'file' field");
                (
                    StatusCode::BAD_REQUEST,
                    "NO_FILE",
                    "No file provided. Send a file in the 'file' field.".to_string(),
                )
            }
            ApplicationError::FileTooLarge { limit } => {
                warn!("Rejected oversized upload (limit {} bytes)", limit);
                (
                    StatusCode::BAD_REQUEST,
                    "FILE_TOO_LARGE",
                    format!("File exceeds the maximum allowed size of {} bytes", limit),
                )
            }
            ApplicationError::FileNotFound => {
                warn!("Requested file id not found");
                (
                    StatusCode::NOT_FOUND,
                    "FILE_NOT_FOUND",
                    "File not found".to_string(),
                )
            }
            ApplicationError::EndpointNotFound => (
                StatusCode::NOT_FOUND,
                "ENDPOINT_NOT_FOUND",
                "Endpoint not found".to_string(),
            ),
            ApplicationError::UploadFailed(ref msg) => {
                error!("Upload failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_FAILED",
                    "Upload failed".to_string(),
                )
            }
            ApplicationError::Internal(ref msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}
