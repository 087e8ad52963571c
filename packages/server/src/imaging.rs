//! Image generation facade: model call, decode, local staging, upload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use blogsmith_storage::{ObjectStore, StorageError};
use rand::Rng;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::assembly::{image_file_name, image_key};
use crate::providers::{ImageModel, ImageRequest, ModelError};

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 400;
/// Inclusive upper bound of the per-request seed.
pub const MAX_SEED: u32 = 858_993_460;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("image model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("image payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to stage image locally: {0}")]
    Staging(#[from] std::io::Error),

    #[error("failed to upload image: {0}")]
    Upload(#[from] StorageError),
}

#[derive(Clone)]
pub struct ImageService {
    model: Arc<dyn ImageModel>,
    store: Arc<dyn ObjectStore>,
    staging_dir: PathBuf,
}

impl ImageService {
    pub fn new(model: Arc<dyn ImageModel>, store: Arc<dyn ObjectStore>, staging_dir: PathBuf) -> Self {
        Self {
            model,
            store,
            staging_dir,
        }
    }

    /// Generate an image for `prompt` and return its object-storage URL.
    pub async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ImageError::EmptyPrompt);
        }
        let seed = rand::rng().random_range(0..=MAX_SEED);
        self.generate_with_seed(prompt, seed).await
    }

    /// Generate with a caller-chosen seed.
    ///
    /// The staged file is removed after the upload attempt whatever its
    /// outcome; the object store holds the only durable copy.
    #[instrument(skip(self, prompt))]
    pub async fn generate_with_seed(&self, prompt: &str, seed: u32) -> Result<String, ImageError> {
        let request = ImageRequest {
            prompt: prompt.to_string(),
            seed,
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        };
        let encoded = self.model.generate(&request).await?;
        let bytes = STANDARD.decode(encoded.trim())?;

        let staged = self.stage(seed, &bytes).await?;
        let uploaded = self.upload(seed, &staged).await;

        if let Err(e) = fs::remove_file(&staged).await {
            warn!(path = %staged.display(), "Failed to remove staged image: {}", e);
        }

        let url = uploaded?;
        info!(seed, size = bytes.len(), %url, "Image generated");
        Ok(url)
    }

    async fn stage(&self, seed: u32, bytes: &[u8]) -> Result<PathBuf, ImageError> {
        fs::create_dir_all(&self.staging_dir).await?;
        let path = self
            .staging_dir
            .join(format!("{}_{}", uuid::Uuid::new_v4(), image_file_name(seed)));
        fs::write(&path, bytes).await?;
        Ok(path)
    }

    async fn upload(&self, seed: u32, staged: &Path) -> Result<String, ImageError> {
        let bytes = fs::read(staged).await?;
        let url = self
            .store
            .publish(&image_key(seed), &bytes, "image/png")
            .await?;
        Ok(url)
    }
}
