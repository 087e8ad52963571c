use serde::{Deserialize, Serialize};

use crate::entity::blog;
use crate::error::AppError;
use crate::generation::SectionKind;

/// Request body for content generation.
///
/// With `section` set, one fixed section is generated for the topic.
/// Without it the free-form path runs: `prompt` is required and `content`,
/// when given, is revised instead of writing from scratch.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    #[schema(example = 7)]
    pub topic_id: i32,
    pub section: Option<SectionKind>,
    /// Prior content to revise (free-form path only).
    pub content: Option<String>,
    /// Extra instruction for the model.
    #[schema(example = "Keep it under 300 words")]
    pub prompt: Option<String>,
}

pub fn validate_generate_request(payload: &GenerateRequest) -> Result<(), AppError> {
    if payload.section.is_none()
        && payload
            .prompt
            .as_deref()
            .is_none_or(|p| p.trim().is_empty())
    {
        return Err(AppError::Validation(
            "Prompt is required when no section is given".into(),
        ));
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    /// Generated text. HTML for INTRODUCTION and BODY.
    pub content: String,
}

/// Request body for saving one blog section.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SaveBlogRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    #[schema(example = 7)]
    pub topic_id: i32,
    /// Display title of the blog; left unchanged when omitted.
    #[schema(example = "Portugal on 40 euros a day")]
    pub blog_title: Option<String>,
    pub section: SectionKind,
    pub content: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Blog section saved successfully")]
    pub message: String,
}

/// Stored sections for one (user, topic). Unwritten sections are `null`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogResponse {
    pub blog_title: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub body: Option<String>,
}

impl From<blog::Model> for BlogResponse {
    fn from(m: blog::Model) -> Self {
        Self {
            blog_title: m.blog_title,
            title: m.title,
            intro: m.introduction,
            body: m.body,
        }
    }
}
