//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use tubely_api::{AppState, build_router};
use tubely_auth::{JwtDecoder, JwtEncoder};
use tubely_core::AppResult;
use tubely_core::config::{AppConfig, DatabaseBackend};
use tubely_core::error::AppError;
use tubely_core::types::{UserId, VideoId};
use tubely_database::MemoryVideoRepository;
use tubely_database::repositories::{VideoCatalog, VideoStore};
use tubely_entity::video::{CreateVideo, Video};
use tubely_storage::LocalBlobStore;

/// Signing secret shared by the test server and the tokens it is sent.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Public prefix the test server hands out for stored thumbnails.
pub const ASSETS_BASE_URL: &str = "http://localhost:8091/assets";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing datastore, for seeding and inspecting records
    pub videos: MemoryVideoRepository,
    /// Application config
    pub config: AppConfig,
    /// Assets root; removed when the app is dropped
    pub assets: TempDir,
    encoder: JwtEncoder,
}

/// Reads from the shared repository but refuses every update.
struct FailingUpdates(MemoryVideoRepository);

#[async_trait]
impl VideoStore for FailingUpdates {
    async fn get(&self, id: VideoId) -> AppResult<Video> {
        self.0.get(id).await
    }

    async fn update(&self, _video: &Video) -> AppResult<Video> {
        Err(AppError::database("simulated datastore outage"))
    }
}

impl TestApp {
    /// Create a new test application backed by an in-memory datastore
    pub async fn new() -> Self {
        Self::build(|repo| Arc::new(repo) as Arc<dyn VideoStore>, None).await
    }

    /// Create a test application whose datastore fails every update
    pub async fn with_failing_updates() -> Self {
        Self::build(|repo| Arc::new(FailingUpdates(repo)) as Arc<dyn VideoStore>, None).await
    }

    /// Create a test application with a ceiling on upload bodies
    pub async fn with_upload_limit(max_bytes: usize) -> Self {
        Self::build(|repo| Arc::new(repo) as Arc<dyn VideoStore>, Some(max_bytes)).await
    }

    async fn build(
        store: impl FnOnce(MemoryVideoRepository) -> Arc<dyn VideoStore>,
        upload_limit: Option<usize>,
    ) -> Self {
        let assets = tempfile::tempdir().expect("Failed to create assets dir");

        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.storage.assets_root = assets.path().to_string_lossy().into_owned();
        config.storage.assets_base_url = ASSETS_BASE_URL.to_string();
        config.storage.upload_limit_bytes = upload_limit;

        let videos = MemoryVideoRepository::new();
        let blob_store = LocalBlobStore::new(assets.path(), ASSETS_BASE_URL)
            .await
            .expect("Failed to init blob store");

        let state = AppState::new(
            config.clone(),
            Arc::new(JwtDecoder::new(&config.auth)),
            store(videos.clone()),
            Arc::new(videos.clone()),
            Arc::new(blob_store),
        );

        Self {
            router: build_router(state),
            videos,
            encoder: JwtEncoder::new(&config.auth),
            config,
            assets,
        }
    }

    /// A valid access token for `user`
    pub fn token_for(&self, user: UserId) -> String {
        self.encoder
            .issue_access_token(user)
            .expect("Failed to issue token")
            .token
    }

    /// Insert a video owned by `owner`
    pub async fn seed_video(&self, owner: UserId) -> Video {
        self.videos
            .create(&CreateVideo {
                user_id: owner,
                title: "Boots demo".to_string(),
                description: "Product walkthrough".to_string(),
            })
            .await
            .expect("Failed to seed video")
    }

    /// Current state of a stored video
    pub async fn video(&self, id: VideoId) -> Video {
        self.videos.get(id).await.expect("Video should exist")
    }

    /// Names of every file under the assets root
    pub fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(self.assets.path())
            .expect("Failed to read assets dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect()
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST a multipart form to the thumbnail endpoint
    pub async fn upload_thumbnail(
        &self,
        video_id: &str,
        token: Option<&str>,
        parts: &[FormPart],
    ) -> TestResponse {
        let (content_type, body) = multipart_body(parts);

        let mut req = Request::builder()
            .method("POST")
            .uri(format!("/api/thumbnail_upload/{video_id}"))
            .header("Content-Type", content_type);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");
        self.send(req).await
    }

    /// Send a request and return the raw response body
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Bytes) {
        let req = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        (status, bytes)
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body.get("error").and_then(Value::as_str).unwrap_or("")
    }
}

/// One part of a multipart form
pub struct FormPart {
    /// Form field name
    pub name: &'static str,
    /// Declared `Content-Type`, if any
    pub content_type: Option<&'static str>,
    /// Part payload
    pub data: Vec<u8>,
}

impl FormPart {
    /// A `thumbnail` file part with the given type and bytes
    pub fn thumbnail(content_type: &'static str, data: &[u8]) -> Self {
        Self {
            name: "thumbnail",
            content_type: Some(content_type),
            data: data.to_vec(),
        }
    }
}

/// A few bytes that start like a PNG file.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDRfake-image-payload";

/// A few bytes that start like a JPEG file.
pub const JPEG_BYTES: &[u8] = b"\xff\xd8\xff\xe0\x00\x10JFIFfake-image-payload\xff\xd9";

const BOUNDARY: &str = "tubely-test-boundary-7MA4YWxkTrZu0gW";

/// Encode `parts` as `multipart/form-data`, returning the content type and body
pub fn multipart_body(parts: &[FormPart]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"upload.bin\"\r\n",
                part.name
            )
            .as_bytes(),
        );
        if let Some(ct) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
