use axum::{Json, extract::State};
use tracing::instrument;

use super::find_owned_topic;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::blog::*;
use crate::models::shared::BlogKeyQuery;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    post,
    path = "/generate",
    tag = "Content",
    operation_id = "generateContent",
    summary = "Generate blog content",
    description = "Generates one fixed section (`section` set) or free-form content from `prompt`, optionally revising `content`. Nothing is persisted.",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated content", body = GenerateResponse),
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
pub async fn generate(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    auth_user.require_owner(payload.user_id)?;
    validate_generate_request(&payload)?;

    let topic = find_owned_topic(&state.db, payload.user_id, payload.topic_id).await?;
    let instruction = payload.prompt.as_deref().unwrap_or_default();

    let content = match payload.section {
        Some(kind) => {
            state
                .generator
                .generate_section(kind, &topic.title, instruction)
                .await?
        }
        None => {
            state
                .generator
                .generate_free_form(&topic.title, payload.content.as_deref(), instruction)
                .await?
        }
    };

    Ok(Json(GenerateResponse { content }))
}

#[utoipa::path(
    post,
    path = "/save_blog",
    tag = "Content",
    operation_id = "saveBlogSection",
    summary = "Save one blog section",
    description = "Upserts a single section of the (user, topic) blog. Other sections are left unchanged.",
    request_body = SaveBlogRequest,
    responses(
        (status = 200, description = "Section saved", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Topic not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(user_id = payload.user_id, topic_id = payload.topic_id, section = payload.section.as_str())
)]
pub async fn save_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveBlogRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    auth_user.require_owner(payload.user_id)?;
    find_owned_topic(&state.db, payload.user_id, payload.topic_id).await?;

    store::blogs::upsert_section(
        &state.db,
        payload.user_id,
        payload.topic_id,
        payload.blog_title.as_deref(),
        payload.section,
        &payload.content,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Blog section saved successfully".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/get_blog",
    tag = "Content",
    operation_id = "getBlog",
    summary = "Fetch the stored sections of a blog",
    params(BlogKeyQuery),
    responses(
        (status = 200, description = "Stored sections", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "No blog for this topic (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = query.user_id, topic_id = query.topic_id))]
pub async fn get_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BlogKeyQuery>,
) -> Result<Json<BlogResponse>, AppError> {
    auth_user.require_owner(query.user_id)?;

    let blog = store::blogs::find_blog(&state.db, query.user_id, query.topic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))?;

    Ok(Json(BlogResponse::from(blog)))
}
