use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Authenticated user extracted from the `Authorization: Bearer <token>` header.
///
/// Add this as the first handler parameter to require authentication; the
/// token is checked before any body extraction or store access happens.
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

impl AuthUser {
    /// Returns `Ok(())` if the token belongs to `user_id`, `Err(PermissionDenied)` otherwise.
    pub fn require_owner(&self, user_id: i32) -> Result<(), AppError> {
        if self.user_id == user_id {
            Ok(())
        } else {
            tracing::warn!(
                token_user = self.user_id,
                requested_user = user_id,
                "Rejected cross-user access"
            );
            Err(AppError::PermissionDenied)
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        Ok(AuthUser {
            user_id: claims.uid,
            username: claims.sub,
        })
    }
}
