use serde::Deserialize;

use crate::error::AppError;

/// `user_id` + `topic_id` query pair used by the read endpoints.
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogKeyQuery {
    /// Owner of the content; must match the token.
    #[param(example = 42)]
    pub user_id: i32,
    #[param(example = 7)]
    pub topic_id: i32,
}

/// Reject a field that is empty after trimming.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a trimmed title (1-256 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(AppError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    Ok(())
}
