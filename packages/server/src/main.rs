use std::sync::Arc;

use anyhow::Context;
use blogsmith_server::config::{AppConfig, StorageBackend, StorageConfig};
use blogsmith_server::database::init_db;
use blogsmith_server::generation::Generator;
use blogsmith_server::imaging::ImageService;
use blogsmith_server::providers::bedrock::{BedrockImageModel, BedrockRuntime, BedrockTextModel};
use blogsmith_server::state::AppState;
use blogsmith_storage::ObjectStore;
use blogsmith_storage::filesystem::FilesystemObjectStore;
use blogsmith_storage::s3::{S3ObjectStore, S3Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = init_db(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to initialize database")?;
    info!("Database ready");

    let object_store = build_object_store(&config).await?;

    let runtime = BedrockRuntime::new(&config.model).context("Failed to build model client")?;
    let generator = Generator::new(Arc::new(BedrockTextModel::new(
        runtime.clone(),
        &config.model,
    )));
    let images = ImageService::new(
        Arc::new(BedrockImageModel::new(runtime, &config.model)),
        object_store.clone(),
        config.image.staging_dir.clone(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        db,
        config,
        generator,
        images,
        object_store,
    };

    let app = blogsmith_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    info!("API docs at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_object_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ObjectStore>> {
    let storage: &StorageConfig = &config.storage;
    match storage.backend {
        StorageBackend::S3 => {
            let store = S3ObjectStore::new(&S3Settings {
                bucket: storage.bucket.clone(),
                region: storage.region.clone(),
                endpoint: storage.endpoint.clone(),
                access_key: storage.access_key.clone(),
                secret_key: storage.secret_key.clone(),
                public_base_url: storage.public_base_url.clone(),
            })
            .context("Failed to configure S3 storage")?;
            info!(bucket = %storage.bucket, region = %storage.region, "Using S3 object storage");
            Ok(Arc::new(store))
        }
        StorageBackend::Filesystem => {
            let public_base_url = match &storage.public_base_url {
                Some(url) => url.clone(),
                None => {
                    let root = std::path::absolute(&storage.root)
                        .context("Failed to resolve storage root")?;
                    format!("file://{}", root.display())
                }
            };
            let store = FilesystemObjectStore::new(storage.root.clone(), public_base_url)
                .await
                .context("Failed to initialize filesystem storage")?;
            info!(root = %storage.root.display(), "Using filesystem object storage");
            Ok(Arc::new(store))
        }
    }
}
