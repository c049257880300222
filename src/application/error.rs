use thiserror::Error;

/// Every failure a handler can surface. Mapped to HTTP status codes and the
/// JSON error envelope in the adapters layer only.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No file provided in the 'file' field")]
    NoFile,

    #[error("File exceeds the maximum allowed size of {limit} bytes")]
    FileTooLarge { limit: u64 },

    #[error("File not found")]
    FileNotFound,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
