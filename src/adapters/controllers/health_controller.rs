use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::System;
use tracing::info;

use crate::adapters::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: i64,
    #[serde(rename = "fileCount")]
    pub file_count: usize,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub success: bool,
    pub service: String,
    pub version: String,
    pub description: String,
    pub endpoints: EndpointsInfo,
    pub limits: LimitsInfo,
}

#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    pub upload: String,
    pub file: String,
    pub info: String,
    pub files: String,
    pub delete: String,
    pub health: String,
}

#[derive(Debug, Serialize)]
pub struct LimitsInfo {
    #[serde(rename = "maxFileSizeBytes")]
    pub max_file_size_bytes: u64,
    #[serde(rename = "maxFilesPerRequest")]
    pub max_files_per_request: usize,
}

pub struct HealthController;

impl HealthController {
    /// GET /health
    pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
        info!("Health check requested");

        let file_count = app_state.file_store.count().await.unwrap_or(0);

        // Collect system metrics (only refresh what's needed)
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            environment: app_state.environment.clone(),
            uptime_seconds: (Utc::now() - app_state.started_at).num_seconds(),
            file_count,
            metrics: SystemMetrics {
                cpu_usage_percent: sys.global_cpu_usage(),
                memory_used_bytes: memory_used,
                memory_total_bytes: memory_total,
                memory_usage_percent,
            },
        })
    }

    /// GET /
    /// Static description of the service, its endpoints and its limits.
    pub async fn service_info(State(app_state): State<AppState>) -> Json<ServiceInfoResponse> {
        Json(ServiceInfoResponse {
            success: true,
            service: "filedrop".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Volatile file upload service. Files live in process memory and are lost on restart.".to_string(),
            endpoints: EndpointsInfo {
                upload: "POST /upload (multipart, field 'file')".to_string(),
                file: "GET /file/{id}".to_string(),
                info: "GET /info/{id}".to_string(),
                files: "GET /files".to_string(),
                delete: "DELETE /file/{id}".to_string(),
                health: "GET /health".to_string(),
            },
            limits: LimitsInfo {
                max_file_size_bytes: app_state.limits.max_file_size,
                max_files_per_request: app_state.limits.max_files_per_request,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;
    use tower_http::cors::CorsLayer;

    use crate::{
        adapters::{repositories::InMemoryFileStore, routes::build_router, state::AppState},
        application::repositories::file_store::FileStore,
        domain::config::UploadLimits,
    };

    fn test_server() -> TestServer {
        let file_store = Arc::new(InMemoryFileStore::new()) as Arc<dyn FileStore>;
        let state = AppState::new("test".to_string(), UploadLimits::default(), file_store);
        TestServer::new(build_router(state, CorsLayer::permissive())).unwrap()
    }

    #[tokio::test]
    async fn health_reports_status_and_metrics() {
        let server = test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["fileCount"], 0);
        assert!(body["timestamp"].is_string());
        assert!(body["metrics"]["memoryTotalBytes"].is_number());
    }

    #[tokio::test]
    async fn responses_carry_permissive_cors_headers() {
        let server = test_server();
        let response = server
            .get("/health")
            .add_header("origin", "https://app.example.com")
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn root_describes_endpoints_and_limits() {
        let server = test_server();
        let response = server.get("/").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["service"], "filedrop");
        assert_eq!(body["limits"]["maxFileSizeBytes"], 20 * 1024 * 1024);
        assert_eq!(body["limits"]["maxFilesPerRequest"], 5);
        assert!(body["endpoints"]["upload"].as_str().unwrap().contains("/upload"));
    }
}
