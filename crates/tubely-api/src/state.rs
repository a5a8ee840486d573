//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tubely_core::config::AppConfig;
use tubely_core::traits::{BlobStore, TokenAuthenticator};
use tubely_database::repositories::{VideoCatalog, VideoStore};
use tubely_service::{ThumbnailService, VideoService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Collaborators ────────────────────────────────────────
    /// Bearer token validator
    pub authenticator: Arc<dyn TokenAuthenticator>,
    /// Thumbnail file store
    pub blob_store: Arc<dyn BlobStore>,

    // ── Services ─────────────────────────────────────────────
    /// Thumbnail upload flow
    pub thumbnail_service: Arc<ThumbnailService>,
    /// Video record operations
    pub video_service: Arc<VideoService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("blob_store", &self.blob_store)
            .finish()
    }
}

impl AppState {
    /// Wire the services on top of the given collaborators.
    pub fn new(
        config: AppConfig,
        authenticator: Arc<dyn TokenAuthenticator>,
        video_store: Arc<dyn VideoStore>,
        video_catalog: Arc<dyn VideoCatalog>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let thumbnail_service = Arc::new(ThumbnailService::new(
            Arc::clone(&video_store),
            Arc::clone(&blob_store),
        ));
        let video_service = Arc::new(VideoService::new(video_store, video_catalog));

        Self {
            config: Arc::new(config),
            authenticator,
            blob_store,
            thumbnail_service,
            video_service,
        }
    }
}
