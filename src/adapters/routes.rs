use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    adapters::{
        controllers::{file_controller::FileController, health_controller::HealthController},
        state::AppState,
    },
    application::error::ApplicationError,
};

async fn endpoint_not_found() -> ApplicationError {
    ApplicationError::EndpointNotFound
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let body_limit = state.limits.body_limit();

    Router::new()
        .route("/", get(HealthController::service_info))
        .route("/health", get(HealthController::health_check))
        .route("/upload", post(FileController::upload_file))
        .route(
            "/file/{id}",
            get(FileController::download_file).delete(FileController::delete_file),
        )
        .route("/info/{id}", get(FileController::get_file_info))
        .route("/files", get(FileController::list_files))
        .fallback(endpoint_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}
