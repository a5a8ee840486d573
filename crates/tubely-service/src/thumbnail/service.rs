//! Thumbnail upload: ownership check, storage and record update.

use std::sync::Arc;

use tracing::{error, info, warn};

use tubely_core::error::{AppError, ErrorKind};
use tubely_core::traits::storage::{BlobStore, ByteStream};
use tubely_core::types::{UserId, VideoId};
use tubely_database::repositories::VideoStore;
use tubely_entity::video::Video;
use tubely_storage::naming::{StoredFile, ThumbnailFormat, random_file_name};

/// A thumbnail image as received from the client.
pub struct ThumbnailUpload<'a> {
    /// Declared format, already checked against the accepted types.
    pub format: ThumbnailFormat,
    /// Client-supplied file name. Logged only.
    pub original_name: Option<String>,
    /// The image bytes.
    pub stream: ByteStream<'a>,
}

impl std::fmt::Debug for ThumbnailUpload<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailUpload")
            .field("format", &self.format)
            .field("original_name", &self.original_name)
            .finish()
    }
}

/// Stores thumbnails and points video records at them.
#[derive(Clone)]
pub struct ThumbnailService {
    videos: Arc<dyn VideoStore>,
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for ThumbnailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailService")
            .field("blobs", &self.blobs)
            .finish()
    }
}

impl ThumbnailService {
    /// Creates a new thumbnail service.
    pub fn new(videos: Arc<dyn VideoStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { videos, blobs }
    }

    /// Replace the thumbnail of `video_id` with `upload` on behalf of `user_id`.
    ///
    /// The file is fully written before the record is touched. If the record
    /// update fails the file stays on disk unreferenced.
    pub async fn upload(
        &self,
        user_id: UserId,
        video_id: VideoId,
        upload: ThumbnailUpload<'_>,
    ) -> Result<Video, AppError> {
        let mut video = self.videos.get(video_id).await.map_err(|e| match e.kind {
            ErrorKind::NotFound => e.into_kind(ErrorKind::Validation, "Unable to find video"),
            _ => e.into_kind(ErrorKind::Internal, "Couldn't fetch video"),
        })?;

        if !video.is_owned_by(user_id) {
            warn!(
                video_id = %video_id,
                user_id = %user_id,
                owner_id = %video.user_id,
                "Thumbnail upload rejected: caller does not own video"
            );
            return Err(AppError::authorization("You do not own this video"));
        }

        let stored = self.store_file(upload.format, upload.stream).await?;
        info!(
            video_id = %video_id,
            original_name = upload.original_name.as_deref().unwrap_or(""),
            stored_name = %stored.name,
            bytes = stored.bytes_written,
            "Thumbnail stored"
        );

        video.set_thumbnail_url(stored.url.clone());
        let updated = self.videos.update(&video).await.map_err(|e| {
            error!(
                video_id = %video_id,
                orphaned_file = %stored.name,
                "Thumbnail stored but video update failed"
            );
            e.into_kind(ErrorKind::Internal, "Couldn't update video")
        })?;

        Ok(updated)
    }

    async fn store_file(
        &self,
        format: ThumbnailFormat,
        stream: ByteStream<'_>,
    ) -> Result<StoredFile, AppError> {
        let name = random_file_name(format)?;
        let url = self.blobs.url_for(&name);

        let bytes_written = self
            .blobs
            .write_stream(&name, stream)
            .await
            .map_err(|e| e.into_kind(ErrorKind::Internal, "Couldn't save thumbnail"))?;

        Ok(StoredFile {
            name,
            url,
            bytes_written,
        })
    }
}
