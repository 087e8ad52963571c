pub mod auth;
pub mod blog;
pub mod image;
pub mod topic;
pub mod webpage;

use sea_orm::ConnectionTrait;

use crate::entity::topic as topic_entity;
use crate::error::AppError;
use crate::store;

/// Find a topic owned by `user_id` or return 404.
async fn find_owned_topic<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
) -> Result<topic_entity::Model, AppError> {
    store::topics::find_owned(db, user_id, topic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".into()))
}
