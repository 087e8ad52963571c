use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::entity::blog;
use crate::generation::SectionKind;

fn section_column(section: SectionKind) -> blog::Column {
    match section {
        SectionKind::Title => blog::Column::Title,
        SectionKind::Introduction => blog::Column::Introduction,
        SectionKind::Body => blog::Column::Body,
    }
}

/// Write one section of the (user, topic) blog, creating the row if needed.
///
/// Other sections are left untouched. `blog_title` is only overwritten when
/// supplied.
pub async fn upsert_section<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
    blog_title: Option<&str>,
    section: SectionKind,
    content: &str,
) -> Result<(), DbErr> {
    let now = chrono::Utc::now();
    let mut model = blog::ActiveModel {
        user_id: Set(user_id),
        topic_id: Set(topic_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    model.set(section_column(section), Some(content.to_string()).into());

    let mut update_columns = vec![section_column(section), blog::Column::UpdatedAt];
    if let Some(title) = blog_title {
        model.blog_title = Set(Some(title.to_string()));
        update_columns.push(blog::Column::BlogTitle);
    }

    blog::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([blog::Column::UserId, blog::Column::TopicId])
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

pub async fn find_blog<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    topic_id: i32,
) -> Result<Option<blog::Model>, DbErr> {
    blog::Entity::find_by_id((user_id, topic_id)).one(db).await
}
