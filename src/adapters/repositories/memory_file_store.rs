use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    application::{error::ApplicationError, repositories::file_store::FileStore},
    domain::models::file::FileRecord,
};

/// Process-memory file store. Everything lives in a single mutex-guarded
/// map: no eviction, no capacity bound, no expiration. A cold start wipes
/// it, which is the intended lifecycle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStore {
    records: Arc<Mutex<HashMap<String, FileRecord>>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn put(&self, record: FileRecord) -> Result<(), ApplicationError> {
        let mut records = self.records.lock().unwrap();
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<FileRecord>, ApplicationError> {
        let records = self.records.lock().unwrap();
        Ok(records.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, ApplicationError> {
        let mut records = self.records.lock().unwrap();
        Ok(records.remove(id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<FileRecord>, ApplicationError> {
        let records = self.records.lock().unwrap();
        let mut all: Vec<FileRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| {
            a.uploaded_at
                .cmp(&b.uploaded_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }

    async fn count(&self) -> Result<usize, ApplicationError> {
        let records = self.records.lock().unwrap();
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, payload: &[u8]) -> FileRecord {
        FileRecord::new(
            id.to_string(),
            "test.bin".to_string(),
            "application/octet-stream".to_string(),
            payload.to_vec(),
        )
    }

    #[tokio::test]
    async fn put_then_get_returns_same_bytes() {
        let store = InMemoryFileStore::new();
        let payload = vec![0u8, 1, 2, 255, 254];
        store.put(record("abc", &payload)).await.unwrap();

        let found = store.get("abc").await.unwrap().unwrap();
        assert_eq!(found.payload, payload);
        assert_eq!(found.size, payload.len() as u64);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryFileStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_twice() {
        let store = InMemoryFileStore::new();
        store.put(record("abc", b"hello")).await.unwrap();

        assert!(store.delete("abc").await.unwrap());
        assert!(!store.delete("abc").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn colliding_id_overwrites() {
        let store = InMemoryFileStore::new();
        store.put(record("abc", b"first")).await.unwrap();
        store.put(record("abc", b"second")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let found = store.get("abc").await.unwrap().unwrap();
        assert_eq!(found.payload, b"second");
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_upload_time() {
        let store = InMemoryFileStore::new();
        for id in ["one", "two", "three"] {
            store.put(record(id, id.as_bytes())).await.unwrap();
            // Distinct timestamps so ordering is observable.
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let all = store.list_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn concurrent_puts_all_land() {
        let store = InMemoryFileStore::new();
        let mut handles = Vec::new();

        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.put(record(&format!("id-{i}"), b"data")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 8);
    }
}
