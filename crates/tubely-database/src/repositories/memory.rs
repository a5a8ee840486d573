//! In-process video repository.
//!
//! Backs the `memory` datastore backend and the test suites. Records live
//! for the lifetime of the process.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use tubely_core::error::AppError;
use tubely_core::result::AppResult;
use tubely_core::types::{UserId, VideoId};
use tubely_entity::video::{CreateVideo, Video};

use super::{VideoCatalog, VideoStore};

/// Video repository backed by a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryVideoRepository {
    videos: Arc<DashMap<VideoId, Video>>,
}

impl MemoryVideoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed record, replacing any with the same id.
    pub fn insert(&self, video: Video) {
        self.videos.insert(video.id, video);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoRepository {
    async fn get(&self, id: VideoId) -> AppResult<Video> {
        self.videos
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Video {id} not found")))
    }

    async fn update(&self, video: &Video) -> AppResult<Video> {
        let mut entry = self
            .videos
            .get_mut(&video.id)
            .ok_or_else(|| AppError::not_found(format!("Video {} not found", video.id)))?;
        *entry = video.clone();
        debug!(video_id = %video.id, "Video record updated");
        Ok(video.clone())
    }
}

#[async_trait]
impl VideoCatalog for MemoryVideoRepository {
    async fn create(&self, data: &CreateVideo) -> AppResult<Video> {
        let video = Video::new(data.clone());
        self.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .videos
            .iter()
            .filter(|entry| entry.value().is_owned_by(user_id))
            .map(|entry| entry.value().clone())
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }
}
