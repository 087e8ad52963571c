use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string; never the plaintext.
    pub password: String,

    #[sea_orm(has_many)]
    pub topics: HasMany<super::topic::Entity>,

    #[sea_orm(has_many)]
    pub blogs: HasMany<super::blog::Entity>,

    #[sea_orm(has_many)]
    pub webpages: HasMany<super::webpage::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
