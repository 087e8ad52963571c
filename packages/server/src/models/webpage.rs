use serde::{Deserialize, Serialize};

/// Request body for template generation.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct TemplateRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    #[schema(example = 7)]
    pub topic_id: i32,
    /// Styling instruction appended to the template prompt.
    #[schema(example = "Dark theme, serif headings")]
    pub additional_prompt: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TemplateResponse {
    /// Template with stored sections substituted in.
    pub html: String,
}

/// Request body shared by save and upload.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct WebpageRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    #[schema(example = 7)]
    pub topic_id: i32,
    #[schema(example = "<!DOCTYPE html><html>...</html>")]
    pub html_content: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SaveWebpageResponse {
    #[schema(example = true)]
    pub success: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct WebpageResponse {
    pub html_content: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    #[schema(example = "https://s3.us-east-1.amazonaws.com/webbucket.new/webpages/42_7.html")]
    pub s3_url: String,
}
