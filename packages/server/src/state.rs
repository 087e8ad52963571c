use std::sync::Arc;

use blogsmith_storage::ObjectStore;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::generation::Generator;
use crate::imaging::ImageService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub generator: Generator,
    pub images: ImageService,
    pub object_store: Arc<dyn ObjectStore>,
}
