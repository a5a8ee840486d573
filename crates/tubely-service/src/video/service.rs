//! Creating, fetching and listing video records.

use std::sync::Arc;

use tracing::info;

use tubely_core::error::AppError;
use tubely_core::types::{UserId, VideoId};
use tubely_database::repositories::{VideoCatalog, VideoStore};
use tubely_entity::video::{CreateVideo, Video};

/// Video record operations outside of the upload flow.
#[derive(Clone)]
pub struct VideoService {
    store: Arc<dyn VideoStore>,
    catalog: Arc<dyn VideoCatalog>,
}

impl std::fmt::Debug for VideoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoService").finish()
    }
}

impl VideoService {
    /// Creates a new video service.
    pub fn new(store: Arc<dyn VideoStore>, catalog: Arc<dyn VideoCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Create a video draft owned by `owner`.
    pub async fn create(
        &self,
        owner: UserId,
        title: String,
        description: String,
    ) -> Result<Video, AppError> {
        let video = self
            .catalog
            .create(&CreateVideo {
                user_id: owner,
                title,
                description,
            })
            .await?;

        info!(video_id = %video.id, user_id = %owner, "Video created");
        Ok(video)
    }

    /// Fetch any video by id.
    pub async fn get(&self, id: VideoId) -> Result<Video, AppError> {
        self.store.get(id).await
    }

    /// The videos owned by `owner`, newest first.
    pub async fn list_for_user(&self, owner: UserId) -> Result<Vec<Video>, AppError> {
        self.catalog.list_by_user(owner).await
    }
}
