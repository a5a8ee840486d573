//! PostgreSQL video repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tubely_core::error::{AppError, ErrorKind};
use tubely_core::result::AppResult;
use tubely_core::types::{UserId, VideoId};
use tubely_entity::video::{CreateVideo, Video};

use super::{VideoCatalog, VideoStore};

/// Repository for video records stored in the `videos` table.
#[derive(Debug, Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    /// Create a new video repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a video by ID.
    pub async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }
}

#[async_trait]
impl VideoStore for PgVideoRepository {
    async fn get(&self, id: VideoId) -> AppResult<Video> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Video {id} not found")))
    }

    async fn update(&self, video: &Video) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos SET title = $2, description = $3, thumbnail_url = $4, \
             video_url = $5, updated_at = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update video", e))?
        .ok_or_else(|| AppError::not_found(format!("Video {} not found", video.id)))
    }
}

#[async_trait]
impl VideoCatalog for PgVideoRepository {
    async fn create(&self, data: &CreateVideo) -> AppResult<Video> {
        let video = Video::new(data.clone());
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (id, user_id, title, description, thumbnail_url, video_url, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(video.id)
        .bind(video.user_id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.created_at)
        .bind(video.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create video", e))
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Video>> {
        sqlx::query_as::<_, Video>(
            "SELECT * FROM videos WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))
    }
}
