//! Clients for the remote inference APIs.
//!
//! Handlers never talk to a provider directly: the text and image models are
//! injected into [`crate::state::AppState`] as trait objects so tests can
//! substitute fakes.

pub mod bedrock;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("provider reported an error: {0}")]
    Provider(String),
}

/// Text generation: a single user prompt in, generated text out.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Parameters for a single text-to-image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
}

/// Image generation. Returns the first image as base64-encoded PNG.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> Result<String, ModelError>;
}
