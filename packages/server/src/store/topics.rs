use sea_orm::*;

use crate::entity::topic;

pub async fn create_topic<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    title: &str,
) -> Result<topic::Model, DbErr> {
    topic::ActiveModel {
        user_id: Set(user_id),
        title: Set(title.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Topics owned by `user_id`, oldest first.
pub async fn list_topics<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<topic::Model>, DbErr> {
    topic::Entity::find()
        .filter(topic::Column::UserId.eq(user_id))
        .order_by_asc(topic::Column::Id)
        .all(db)
        .await
}

/// The topic `topic_id` if it is owned by `user_id`.
pub async fn find_owned<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
) -> Result<Option<topic::Model>, DbErr> {
    topic::Entity::find_by_id(topic_id)
        .filter(topic::Column::UserId.eq(user_id))
        .one(db)
        .await
}
