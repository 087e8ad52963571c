use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Blog section set. One row per (user, topic); sections are upserted
/// individually and stay NULL until first written.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "topic_id", to = "id")]
    pub topic: HasOne<super::topic::Entity>,

    pub blog_title: Option<String>,
    pub title: Option<String>,
    pub introduction: Option<String>,
    pub body: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
