use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::entity::webpage;

/// Store the page for (user, topic); last write wins, no history is kept.
pub async fn upsert_webpage<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
    html_content: &str,
) -> Result<(), DbErr> {
    let now = chrono::Utc::now();
    let model = webpage::ActiveModel {
        user_id: Set(user_id),
        topic_id: Set(topic_id),
        html_content: Set(html_content.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    webpage::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([webpage::Column::UserId, webpage::Column::TopicId])
                .update_columns([webpage::Column::HtmlContent, webpage::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

pub async fn find_webpage<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
) -> Result<Option<webpage::Model>, DbErr> {
    webpage::Entity::find_by_id((user_id, topic_id)).one(db).await
}
