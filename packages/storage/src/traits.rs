use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed object storage with publicly reachable URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key`, replacing any existing object.
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Retrieve all bytes stored under `key`.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Public URL of the object stored under `key`.
    fn url_for(&self, key: &str) -> String;

    /// Store `data` under `key` and return its public URL.
    async fn publish(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.put(key, data, content_type).await?;
        Ok(self.url_for(key))
    }
}
