use axum::{Json, extract::State};
use tracing::{info, instrument};

use super::find_owned_topic;
use crate::assembly::{self, Sections};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::shared::{BlogKeyQuery, require_non_empty};
use crate::models::webpage::*;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/generate_template",
    tag = "Webpages",
    operation_id = "generateTemplate",
    summary = "Generate a page template and fill it with the stored blog",
    description = "Asks the model for an HTML/CSS template with placeholder tokens, then substitutes the stored title, introduction and body. Missing sections become empty text.",
    request_body = TemplateRequest,
    responses(
        (status = 200, description = "Filled page", body = TemplateResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Topic not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Model call failed (UPSTREAM_FAILURE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = payload.user_id, topic_id = payload.topic_id)
)]
pub async fn generate_template(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<TemplateRequest>,
) -> Result<Json<TemplateResponse>, AppError> {
    auth_user.require_owner(payload.user_id)?;
    find_owned_topic(&state.db, payload.user_id, payload.topic_id).await?;

    let sections = store::blogs::find_blog(&state.db, payload.user_id, payload.topic_id)
        .await?
        .map(|blog| Sections {
            title: blog.title.unwrap_or_default(),
            introduction: blog.introduction.unwrap_or_default(),
            body: blog.body.unwrap_or_default(),
        })
        .unwrap_or_default();

    let template = state
        .generator
        .generate_template(payload.additional_prompt.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(TemplateResponse {
        html: assembly::fill(&template, &sections),
    }))
}

#[utoipa::path(
    post,
    path = "/save_webpage",
    tag = "Webpages",
    operation_id = "saveWebpage",
    summary = "Save the page for a topic",
    description = "Stores the page for (user, topic), replacing any previous version.",
    request_body = WebpageRequest,
    responses(
        (status = 200, description = "Page saved", body = SaveWebpageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Topic not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = payload.user_id, topic_id = payload.topic_id, size = payload.html_content.len())
)]
pub async fn save_webpage(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<WebpageRequest>,
) -> Result<Json<SaveWebpageResponse>, AppError> {
    auth_user.require_owner(payload.user_id)?;
    require_non_empty(&payload.html_content, "html_content")?;
    find_owned_topic(&state.db, payload.user_id, payload.topic_id).await?;

    store::webpages::upsert_webpage(
        &state.db,
        payload.user_id,
        payload.topic_id,
        &payload.html_content,
    )
    .await?;

    Ok(Json(SaveWebpageResponse { success: true }))
}

#[utoipa::path(
    get,
    path = "/get_webpage",
    tag = "Webpages",
    operation_id = "getWebpage",
    summary = "Fetch the saved page for a topic",
    params(BlogKeyQuery),
    responses(
        (status = 200, description = "Saved page", body = WebpageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "No saved page (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = query.user_id, topic_id = query.topic_id))]
pub async fn get_webpage(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BlogKeyQuery>,
) -> Result<Json<WebpageResponse>, AppError> {
    auth_user.require_owner(query.user_id)?;

    let page = store::webpages::find_webpage(&state.db, query.user_id, query.topic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Webpage not found".into()))?;

    Ok(Json(WebpageResponse {
        html_content: page.html_content,
    }))
}

#[utoipa::path(
    post,
    path = "/upload_to_s3",
    tag = "Webpages",
    operation_id = "uploadWebpage",
    summary = "Publish a page to object storage",
    description = "Uploads the page as `webpages/{user_id}_{topic_id}.html` with content type `text/html` and returns its URL.",
    request_body = WebpageRequest,
    responses(
        (status = 200, description = "Page published", body = UploadResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Topic not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Upload failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = payload.user_id, topic_id = payload.topic_id)
)]
pub async fn upload_to_s3(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<WebpageRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    auth_user.require_owner(payload.user_id)?;
    require_non_empty(&payload.html_content, "html_content")?;
    find_owned_topic(&state.db, payload.user_id, payload.topic_id).await?;

    let key = assembly::webpage_key(payload.user_id, payload.topic_id);
    let s3_url = state
        .object_store
        .publish(&key, payload.html_content.as_bytes(), "text/html")
        .await
        .map_err(|e| AppError::Internal(format!("Webpage upload failed: {}", e)))?;

    info!(%key, "Webpage published");
    Ok(Json(UploadResponse { s3_url }))
}
