//! In-memory storage backend for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{Storage, StorageError, StorageResult};

/// A stored object with its content type.
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Storage backend that keeps objects in a process-local map.
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    public_base_url: String,
}

impl MemoryStorage {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("empty key".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_stores_object_and_returns_url() {
        let storage = MemoryStorage::new("http://localhost/media");
        let url = storage
            .put("gallery/a_1.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost/media/gallery/a_1.png");
        assert_eq!(storage.object_count(), 1);

        let stored = storage.get("gallery/a_1.png").unwrap();
        assert_eq!(stored.data, vec![1, 2, 3]);
        assert_eq!(stored.content_type, "image/png");
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let storage = MemoryStorage::new("http://localhost");
        assert!(storage.put("", vec![], "image/png").await.is_err());
    }
}
