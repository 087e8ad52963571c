use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::key::validate_key;
use super::traits::ObjectStore;

/// Filesystem-backed object store.
///
/// Objects live at `{root}/{key}`; URLs are `{public_base_url}/{key}`.
pub struct FilesystemObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl FilesystemObjectStore {
    /// Create a new filesystem object store rooted at `root`.
    pub async fn new(
        root: PathBuf,
        public_base_url: impl Into<String>,
    ) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).await?;
        fs::create_dir_all(root.join(".tmp")).await?;
        Ok(Self {
            root,
            public_base_url: public_base_url.into(),
        })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.root
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ObjectStore for FilesystemObjectStore {
    async fn put(&self, key: &str, data: &[u8], _content_type: &str) -> Result<(), StorageError> {
        let key = validate_key(key)?;
        let object_path = self.object_path(key);

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Some(parent) = object_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        if let Err(e) = fs::rename(&temp_path, &object_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!(key, size = data.len(), "Stored object on filesystem");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let key = validate_key(key)?;
        match fs::read(self.object_path(key)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}
