use std::time::Duration;

use sea_orm::sea_query::{Index, SqliteQueryBuilder};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::entity::topic;

pub async fn init_db(db_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("blogsmith_server::entity::*")
        .sync(&db)
        .await?;

    ensure_indexes(&db).await?;

    Ok(db)
}

/// Ensure secondary indexes exist.
///
/// Topic listing filters on `user_id`, which is not covered by the primary key.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_topic_user")
        .table(topic::Entity)
        .col(topic::Column::UserId)
        .to_string(SqliteQueryBuilder);

    match db.execute_unprepared(&stmt).await {
        Ok(_) => info!("Ensured index idx_topic_user exists"),
        Err(e) => tracing::warn!("Failed to create index idx_topic_user: {}", e),
    }

    Ok(())
}
