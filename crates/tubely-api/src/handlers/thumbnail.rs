//! Thumbnail upload handler.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use futures::StreamExt;
use tracing::{info, warn};

use tubely_core::error::{AppError, ErrorKind};
use tubely_entity::video::Video;
use tubely_service::ThumbnailUpload;
use tubely_storage::ThumbnailFormat;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::extractors::path::parse_video_id;
use crate::state::AppState;

/// Multipart form field carrying the image.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// POST /api/thumbnail_upload/{video_id}
///
/// Extractor failures are taken as values so the id is checked before the
/// credential and the credential before the body.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(raw_video_id): Path<String>,
    auth: Result<AuthUser, ApiError>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Video>, ApiError> {
    let video_id = parse_video_id(&raw_video_id)?;
    let user = auth?;

    let mut multipart = multipart.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Couldn't parse multipart form", e)
    })?;

    info!(video_id = %video_id, user_id = %user.user_id, "Uploading thumbnail");

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, "Couldn't parse multipart form", e)
    })? {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let format = ThumbnailFormat::from_content_type(&content_type).ok_or_else(|| {
            warn!(content_type = %content_type, "Rejected thumbnail media type");
            AppError::validation("Invalid file type")
        })?;

        let upload = ThumbnailUpload {
            format,
            original_name: field.file_name().map(String::from),
            stream: Box::pin(field.map(|chunk| chunk.map_err(std::io::Error::other))),
        };

        let video = state
            .thumbnail_service
            .upload(user.user_id, video_id, upload)
            .await?;
        return Ok(Json(video));
    }

    Err(AppError::validation("Unable to find thumbnail field").into())
}
