use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::file::FileRecord};

/// Storage seam between the handlers and whatever holds the records.
///
/// The in-memory implementation cannot fail, but the methods return
/// `Result` so a persistent backend can replace it without touching
/// handler logic.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Inserts under `record.id`. A colliding id silently overwrites; the
    /// caller guarantees uniqueness via 128-bit random ids.
    async fn put(&self, record: FileRecord) -> Result<(), ApplicationError>;

    async fn get(&self, id: &str) -> Result<Option<FileRecord>, ApplicationError>;

    /// Returns `true` iff a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, ApplicationError>;

    /// All records ordered by upload time.
    async fn list_all(&self) -> Result<Vec<FileRecord>, ApplicationError>;

    async fn count(&self) -> Result<usize, ApplicationError>;
}
