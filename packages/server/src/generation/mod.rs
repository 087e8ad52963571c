//! Prompt construction and text generation for blog content.

pub mod output;
pub mod prompts;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::providers::{ModelError, TextModel};

/// A named slot within a blog's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionKind {
    Title,
    Introduction,
    Body,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Title => "TITLE",
            SectionKind::Introduction => "INTRODUCTION",
            SectionKind::Body => "BODY",
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("text model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("text model returned no content")]
    EmptyOutput,
}

/// Generation facade over an injected [`TextModel`].
///
/// Never persists anything; callers decide what to store.
#[derive(Clone)]
pub struct Generator {
    model: Arc<dyn TextModel>,
}

impl Generator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Generate one fixed section for `topic`.
    #[instrument(skip(self, instruction), fields(section = kind.as_str()))]
    pub async fn generate_section(
        &self,
        kind: SectionKind,
        topic: &str,
        instruction: &str,
    ) -> Result<String, GenerationError> {
        let raw = self
            .complete(&prompts::section_prompt(kind, topic, instruction))
            .await?;
        non_empty(output::normalize_section(kind, &raw))
    }

    /// Generate fresh content from `instruction`, or revise `prior_content` with it.
    #[instrument(skip(self, prior_content, instruction), fields(revising = prior_content.is_some()))]
    pub async fn generate_free_form(
        &self,
        topic: &str,
        prior_content: Option<&str>,
        instruction: &str,
    ) -> Result<String, GenerationError> {
        let raw = self
            .complete(&prompts::free_form_prompt(topic, prior_content, instruction))
            .await?;
        non_empty(output::strip_code_fences(&raw).to_string())
    }

    /// Generate an HTML/CSS page containing placeholder tokens.
    #[instrument(skip(self, instruction))]
    pub async fn generate_template(&self, instruction: &str) -> Result<String, GenerationError> {
        let raw = self.complete(&prompts::template_prompt(instruction)).await?;
        non_empty(output::strip_code_fences(&raw).to_string())
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let text = self.model.complete(prompt).await?;
        debug!(output_len = text.len(), "Received model output");
        Ok(text)
    }
}

fn non_empty(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        Err(GenerationError::EmptyOutput)
    } else {
        Ok(text)
    }
}
