mod adapters;
mod application;
mod domain;

use std::sync::Arc;

use adapters::{repositories::InMemoryFileStore, routes::build_router, state::AppState};
use application::repositories::file_store::FileStore;
use domain::config::UploadLimits;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let environment =
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    let limits = UploadLimits::from_env();

    tracing::info!(
        "Starting filedrop ({}): max file size {} bytes, max {} files per request",
        environment,
        limits.max_file_size,
        limits.max_files_per_request
    );

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins so the service is callable from any browser origin
        CorsLayer::permissive()
    };

    // The store is volatile on purpose: a cold start means an empty map.
    let file_store = Arc::new(InMemoryFileStore::new()) as Arc<dyn FileStore>;
    let app_state = AppState::new(environment, limits, file_store);

    let router = build_router(app_state, cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
