use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::image::{ImageRequest, ImageResponse};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/generate_image",
    tag = "Images",
    operation_id = "generateImage",
    summary = "Generate an image and publish it",
    description = "Generates an 800x400 image from the prompt, uploads it to object storage and returns its URL.",
    request_body = ImageRequest,
    responses(
        (status = 200, description = "Image published", body = ImageResponse),
        (status = 400, description = "Empty prompt (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Generation or upload failed (IMAGE_GENERATION_FAILED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn generate_image(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ImageRequest>,
) -> Result<Json<ImageResponse>, AppError> {
    let image_url = state.images.generate(&payload.prompt).await?;
    Ok(Json(ImageResponse { image_url }))
}
