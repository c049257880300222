use axum::extract::FromRef;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    application::repositories::file_store::FileStore, domain::config::UploadLimits,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub environment: String,
    pub started_at: DateTime<Utc>,
    pub limits: Arc<UploadLimits>,
    pub file_store: Arc<dyn FileStore>,
}

impl AppState {
    pub fn new(environment: String, limits: UploadLimits, file_store: Arc<dyn FileStore>) -> Self {
        Self {
            environment,
            started_at: Utc::now(),
            limits: Arc::new(limits),
            file_store,
        }
    }
}
