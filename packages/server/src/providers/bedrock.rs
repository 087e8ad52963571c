//! Bedrock runtime `InvokeModel` clients.
//!
//! Text goes through the Anthropic messages schema, images through the Nova
//! Canvas `TEXT_IMAGE` task. Requests authenticate with a bearer API key.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{ImageModel, ImageRequest, ModelError, TextModel};
use crate::config::ModelConfig;

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const IMAGE_QUALITY: &str = "standard";

/// Shared HTTP plumbing for `POST {base_url}/model/{model_id}/invoke`.
#[derive(Clone)]
pub struct BedrockRuntime {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BedrockRuntime {
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
        })
    }

    async fn invoke<Req, Resp>(&self, model_id: &str, body: &Req) -> Result<Resp, ModelError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/model/{}/invoke", self.base_url, model_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status { status, body });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))
    }
}

/// Anthropic Claude on Bedrock.
pub struct BedrockTextModel {
    runtime: BedrockRuntime,
    model_id: String,
    max_tokens: u32,
    temperature: f32,
}

impl BedrockTextModel {
    pub fn new(runtime: BedrockRuntime, config: &ModelConfig) -> Self {
        Self {
            runtime,
            model_id: config.text_model_id.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl TextModel for BedrockTextModel {
    #[instrument(skip(self, prompt), fields(model = %self.model_id, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let body = MessagesRequest::single_turn(prompt, self.max_tokens, self.temperature);
        let response: MessagesResponse = self.runtime.invoke(&self.model_id, &body).await?;
        let text = response.text();
        debug!(output_len = text.len(), "Text model responded");
        Ok(text)
    }
}

/// Amazon Nova Canvas on Bedrock.
pub struct BedrockImageModel {
    runtime: BedrockRuntime,
    model_id: String,
}

impl BedrockImageModel {
    pub fn new(runtime: BedrockRuntime, config: &ModelConfig) -> Self {
        Self {
            runtime,
            model_id: config.image_model_id.clone(),
        }
    }
}

#[async_trait]
impl ImageModel for BedrockImageModel {
    #[instrument(skip(self, request), fields(model = %self.model_id, seed = request.seed))]
    async fn generate(&self, request: &ImageRequest) -> Result<String, ModelError> {
        let body = CanvasRequest::from(request);
        let response: CanvasResponse = self.runtime.invoke(&self.model_id, &body).await?;
        response.into_first_image()
    }
}

// ============================================================================
// Anthropic messages wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

impl<'a> MessagesRequest<'a> {
    fn single_turn(prompt: &'a str, max_tokens: u32, temperature: f32) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens,
            temperature,
            messages: vec![Message {
                role: "user",
                content: vec![ContentBlock {
                    kind: "text",
                    text: prompt,
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

impl MessagesResponse {
    /// Concatenated text of all `text` blocks.
    fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

// ============================================================================
// Nova Canvas wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CanvasRequest<'a> {
    task_type: &'static str,
    text_to_image_params: TextToImageParams<'a>,
    image_generation_config: ImageGenerationConfig,
}

impl<'a> From<&'a ImageRequest> for CanvasRequest<'a> {
    fn from(request: &'a ImageRequest) -> Self {
        Self {
            task_type: "TEXT_IMAGE",
            text_to_image_params: TextToImageParams {
                text: &request.prompt,
            },
            image_generation_config: ImageGenerationConfig {
                seed: request.seed,
                quality: IMAGE_QUALITY,
                height: request.height,
                width: request.width,
                number_of_images: 1,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct TextToImageParams<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageGenerationConfig {
    seed: u32,
    quality: &'static str,
    height: u32,
    width: u32,
    number_of_images: u32,
}

#[derive(Debug, Deserialize)]
struct CanvasResponse {
    #[serde(default)]
    images: Vec<String>,
    error: Option<String>,
}

impl CanvasResponse {
    fn into_first_image(self) -> Result<String, ModelError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(ModelError::Provider(error));
        }
        self.images
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::Malformed("response contained no images".into()))
    }
}
