use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::shared::validate_title;
use crate::models::topic::*;
use crate::state::AppState;
use crate::store;

#[utoipa::path(
    get,
    path = "/topics",
    tag = "Topics",
    operation_id = "listTopics",
    summary = "List a user's topics",
    params(TopicListQuery),
    responses(
        (status = 200, description = "Topics owned by the user", body = TopicListResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(user_id = query.user_id))]
pub async fn list_topics(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TopicListQuery>,
) -> Result<Json<TopicListResponse>, AppError> {
    auth_user.require_owner(query.user_id)?;

    let topics = store::topics::list_topics(&state.db, query.user_id).await?;

    Ok(Json(TopicListResponse {
        topics: topics.into_iter().map(TopicSummary::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/topics",
    tag = "Topics",
    operation_id = "createTopic",
    summary = "Create a topic",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = CreateTopicResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = payload.user_id))]
pub async fn create_topic(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require_owner(payload.user_id)?;
    validate_title(&payload.title)?;

    let topic =
        store::topics::create_topic(&state.db, payload.user_id, payload.title.trim()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTopicResponse {
            topic_id: topic.id,
            message: "Topic created successfully".into(),
        }),
    ))
}
