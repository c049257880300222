/// Upload limits, read once at startup.
///
/// The service keeps everything in process memory, so these are the only
/// knobs: how big a single file may be and how many files a single request
/// may carry. Defaults match the 20 MB / 5 files policy.
#[derive(Debug, Clone)]
pub struct UploadLimits {
    pub max_file_size: u64,
    pub max_files_per_request: usize,
}

pub const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;
pub const DEFAULT_MAX_FILES_PER_REQUEST: usize = 5;

/// Headroom for multipart boundaries and non-file fields on top of the
/// per-file maximum when deriving the request body limit.
const BODY_OVERHEAD: u64 = 1024 * 1024;

impl UploadLimits {
    pub fn from_env() -> Self {
        let max_file_size = std::env::var("MAX_FILE_SIZE_BYTES")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);

        let max_files_per_request = std::env::var("MAX_FILES_PER_REQUEST")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILES_PER_REQUEST);

        Self {
            max_file_size,
            max_files_per_request,
        }
    }

    /// Request body cap handed to axum. An oversized body trips the
    /// multipart reader with a 413, which the upload handler reports as
    /// `FILE_TOO_LARGE` just like an oversized file field.
    pub fn body_limit(&self) -> usize {
        (self.max_file_size + BODY_OVERHEAD) as usize
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files_per_request: DEFAULT_MAX_FILES_PER_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = UploadLimits::default();
        assert_eq!(limits.max_file_size, 20 * 1024 * 1024);
        assert_eq!(limits.max_files_per_request, 5);
        assert!(limits.body_limit() > limits.max_file_size as usize);
    }
}
