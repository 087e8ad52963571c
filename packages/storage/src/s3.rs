use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};

use super::error::StorageError;
use super::key::validate_key;
use super::traits::ObjectStore;

/// Connection settings for an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible services (MinIO, R2, ...).
    pub endpoint: Option<String>,
    /// Static credentials. When absent the environment/profile chain is used.
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Base URL for published objects. Defaults to the regional S3 URL.
    pub public_base_url: Option<String>,
}

/// S3-backed object store.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    public_base_url: String,
}

impl S3ObjectStore {
    pub fn new(settings: &S3Settings) -> Result<Self, StorageError> {
        let region = match &settings.endpoint {
            Some(endpoint) => Region::Custom {
                region: settings.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => settings
                .region
                .parse()
                .map_err(|e| StorageError::Backend(format!("invalid region: {e}")))?,
        };

        let credentials = Credentials::new(
            settings.access_key.as_deref(),
            settings.secret_key.as_deref(),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Backend(format!("credentials: {e}")))?;

        let mut bucket = Bucket::new(&settings.bucket, region, credentials)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        if settings.endpoint.is_some() {
            bucket = bucket.with_path_style();
        }

        let public_base_url = settings.public_base_url.clone().unwrap_or_else(|| {
            format!(
                "https://s3.{}.amazonaws.com/{}",
                settings.region, settings.bucket
            )
        });

        Ok(Self {
            bucket,
            public_base_url,
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        let key = validate_key(key)?;
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(StorageError::Backend(format!(
                "put {key} returned status {status}"
            )));
        }

        tracing::debug!(key, size = data.len(), "Uploaded object to S3");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let key = validate_key(key)?;
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        match response.status_code() {
            200..=299 => Ok(response.bytes().to_vec()),
            404 => Err(StorageError::NotFound(key.to_string())),
            status => Err(StorageError::Backend(format!(
                "get {key} returned status {status}"
            ))),
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}
