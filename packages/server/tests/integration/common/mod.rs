use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tempfile::TempDir;

use blogsmith_server::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, ImageConfig, ModelConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
use blogsmith_server::generation::Generator;
use blogsmith_server::imaging::ImageService;
use blogsmith_server::providers::{ImageModel, ImageRequest, ModelError, TextModel};
use blogsmith_server::state::AppState;
use blogsmith_storage::ObjectStore;
use blogsmith_storage::filesystem::FilesystemObjectStore;

pub const PUBLIC_BASE_URL: &str = "http://objects.test";
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image";

pub mod routes {
    pub const REGISTER: &str = "/api/register";
    pub const LOGIN: &str = "/api/login";
    pub const TOPICS: &str = "/api/topics";
    pub const GENERATE: &str = "/api/generate";
    pub const SAVE_BLOG: &str = "/api/save_blog";
    pub const GENERATE_TEMPLATE: &str = "/api/generate_template";
    pub const GENERATE_IMAGE: &str = "/api/generate_image";
    pub const SAVE_WEBPAGE: &str = "/api/save_webpage";
    pub const UPLOAD: &str = "/api/upload_to_s3";

    pub fn topics(user_id: i32) -> String {
        format!("/api/topics?user_id={user_id}")
    }

    pub fn get_blog(user_id: i32, topic_id: i32) -> String {
        format!("/api/get_blog?user_id={user_id}&topic_id={topic_id}")
    }

    pub fn get_webpage(user_id: i32, topic_id: i32) -> String {
        format!("/api/get_webpage?user_id={user_id}&topic_id={topic_id}")
    }
}

/// Text model that answers every prompt with a configurable reply.
#[derive(Default)]
pub struct FakeTextModel {
    reply: Mutex<Option<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeTextModel {
    pub fn reply_with(&self, text: &str) {
        *self.reply.lock().unwrap() = Some(Ok(text.to_string()));
    }

    /// Make the next calls fail with a provider error carrying `detail`.
    pub fn fail_with(&self, detail: &str) {
        *self.reply.lock().unwrap() = Some(Err(detail.to_string()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for FakeTextModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply.lock().unwrap().clone() {
            Some(Ok(text)) => Ok(text),
            Some(Err(detail)) => Err(ModelError::Status {
                status: 500,
                body: detail,
            }),
            None => Ok("generated text".to_string()),
        }
    }
}

/// Image model returning a fixed PNG payload unless told to fail.
#[derive(Default)]
pub struct FakeImageModel {
    failure: Mutex<Option<String>>,
    requests: Mutex<Vec<ImageRequest>>,
}

impl FakeImageModel {
    pub fn fail_with(&self, detail: &str) {
        *self.failure.lock().unwrap() = Some(detail.to_string());
    }

    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for FakeImageModel {
    async fn generate(&self, request: &ImageRequest) -> Result<String, ModelError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.failure.lock().unwrap().clone() {
            Some(detail) => Err(ModelError::Provider(detail)),
            None => Ok(STANDARD.encode(PNG_BYTES)),
        }
    }
}

/// A running test server backed by a throwaway SQLite file and object root.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    pub text_model: Arc<FakeTextModel>,
    pub image_model: Arc<FakeImageModel>,
    pub object_store: Arc<FilesystemObjectStore>,
    pub dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

/// A logged-in user.
pub struct TestUser {
    pub id: i32,
    pub token: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let db = blogsmith_server::database::init_db(&db_url, 5)
            .await
            .expect("Failed to initialize test database");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: 5,
            },
            auth: AuthConfig {
                jwt_secret: "test-secret-for-integration-tests".to_string(),
                token_ttl_hours: 24,
            },
            model: ModelConfig {
                region: "us-east-1".to_string(),
                endpoint: Some("http://127.0.0.1:9".to_string()),
                api_key: String::new(),
                text_model_id: "test-text".to_string(),
                image_model_id: "test-image".to_string(),
                max_tokens: 3000,
                temperature: 0.5,
                timeout_secs: 5,
            },
            storage: StorageConfig {
                backend: StorageBackend::Filesystem,
                bucket: "test-bucket".to_string(),
                region: "us-east-1".to_string(),
                endpoint: None,
                access_key: None,
                secret_key: None,
                public_base_url: Some(PUBLIC_BASE_URL.to_string()),
                root: dir.path().join("objects"),
            },
            image: ImageConfig {
                staging_dir: dir.path().join("staging"),
            },
        };

        let object_store = Arc::new(
            FilesystemObjectStore::new(app_config.storage.root.clone(), PUBLIC_BASE_URL)
                .await
                .expect("Failed to create object store"),
        );
        let text_model = Arc::new(FakeTextModel::default());
        let image_model = Arc::new(FakeImageModel::default());

        let store: Arc<dyn ObjectStore> = object_store.clone();
        let state = AppState {
            db: db.clone(),
            generator: Generator::new(text_model.clone()),
            images: ImageService::new(
                image_model.clone(),
                store.clone(),
                app_config.image.staging_dir.clone(),
            ),
            object_store: store,
            config: app_config,
        };

        let app = blogsmith_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            text_model,
            image_model,
            object_store,
            dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// Register a user and log in.
    pub async fn create_authenticated_user(&self, username: &str, password: &str) -> TestUser {
        let body = json!({
            "username": username,
            "password": password,
        });

        let reg = self.post_without_token(routes::REGISTER, &body).await;
        assert_eq!(reg.status, 201, "Registration failed: {}", reg.text);

        let res = self.post_without_token(routes::LOGIN, &body).await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);

        TestUser {
            id: res.body["user_id"]
                .as_i64()
                .expect("Login response should contain user_id") as i32,
            token: res.body["token"]
                .as_str()
                .expect("Login response should contain a token")
                .to_string(),
        }
    }

    /// Create a topic via the API and return its `topic_id`.
    pub async fn create_topic(&self, user: &TestUser, title: &str) -> i32 {
        let res = self
            .post_with_token(
                routes::TOPICS,
                &json!({"user_id": user.id, "title": title}),
                &user.token,
            )
            .await;
        assert_eq!(res.status, 201, "create_topic failed: {}", res.text);
        res.body["topic_id"]
            .as_i64()
            .expect("response body should contain 'topic_id'") as i32
    }

    /// Save one blog section via the API.
    pub async fn save_section(&self, user: &TestUser, topic_id: i32, section: &str, content: &str) {
        let res = self
            .post_with_token(
                routes::SAVE_BLOG,
                &json!({
                    "user_id": user.id,
                    "topic_id": topic_id,
                    "section": section,
                    "content": content,
                }),
                &user.token,
            )
            .await;
        assert_eq!(res.status, 200, "save_section failed: {}", res.text);
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}
