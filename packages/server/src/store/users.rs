use sea_orm::*;

use crate::entity::user;

/// Outcome of a registration attempt.
#[derive(Debug)]
pub enum CreateUser {
    Created(user::Model),
    UsernameTaken,
}

/// Insert a user; the unique index on `username` decides conflicts.
pub async fn create_user<C: ConnectionTrait>(
    db: &C,
    username: &str,
    password_hash: String,
) -> Result<CreateUser, DbErr> {
    let new_user = user::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    match new_user.insert(db).await {
        Ok(model) => Ok(CreateUser::Created(model)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Ok(CreateUser::UsernameTaken),
            _ => Err(e),
        },
    }
}

pub async fn find_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
}
