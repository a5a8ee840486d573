//! Video entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tubely_core::types::{UserId, VideoId};

/// A video's metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier.
    pub id: VideoId,
    /// The user who owns this video.
    pub user_id: UserId,
    /// Video title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// URL of the video's thumbnail, once one has been uploaded.
    pub thumbnail_url: Option<String>,
    /// URL of the video file itself.
    pub video_url: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Build a fresh record from creation data.
    pub fn new(data: CreateVideo) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::new(),
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this video.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Point the record at a newly stored thumbnail.
    pub fn set_thumbnail_url(&mut self, url: impl Into<String>) {
        self.thumbnail_url = Some(url.into());
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new video record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// The owning user.
    pub user_id: UserId,
    /// Video title.
    pub title: String,
    /// Free-form description.
    pub description: String,
}
