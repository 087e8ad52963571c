use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite://blog_content.db?mode=rwc`.
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Lifetime of issued bearer tokens.
    pub token_ttl_hours: i64,
}

/// Remote model endpoints (Bedrock runtime).
#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub region: String,
    /// Overrides `https://bedrock-runtime.{region}.amazonaws.com`.
    pub endpoint: Option<String>,
    /// Bearer API key for the runtime endpoint.
    pub api_key: String,
    pub text_model_id: String,
    pub image_model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl ModelConfig {
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Filesystem,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub public_base_url: Option<String>,
    /// Root directory for the filesystem backend.
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Local directory where decoded images are staged before upload.
    pub staging_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
    pub image: ImageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://blog_content.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.token_ttl_hours", 24)?
            .set_default("model.region", "us-east-1")?
            .set_default("model.api_key", "")?
            .set_default(
                "model.text_model_id",
                "anthropic.claude-3-haiku-20240307-v1:0",
            )?
            .set_default("model.image_model_id", "amazon.nova-canvas-v1:0")?
            .set_default("model.max_tokens", 3000)?
            .set_default("model.temperature", 0.5)?
            .set_default("model.timeout_secs", 300)?
            .set_default("storage.backend", "s3")?
            .set_default("storage.bucket", "webbucket.new")?
            .set_default("storage.region", "us-east-1")?
            .set_default("storage.root", "./objects")?
            .set_default("image.staging_dir", "./output")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., BLOGSMITH__AUTH__JWT_SECRET)
            .add_source(
                Environment::with_prefix("BLOGSMITH")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins"),
            )
            .build()?;

        s.try_deserialize()
    }
}
