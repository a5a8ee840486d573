//! Video record handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use tubely_core::error::{AppError, ErrorKind};
use tubely_entity::video::Video;

use crate::dto::request::CreateVideoRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::extractors::path::parse_video_id;
use crate::state::AppState;

/// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CreateVideoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let Json(req) = body.map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "Invalid request body", e)
    })?;
    req.validate()
        .map_err(|e| AppError::with_source(ErrorKind::Validation, "Invalid video title", e))?;

    let video = state
        .video_service
        .create(auth.user_id, req.title, req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /api/videos
pub async fn list_videos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Video>>, ApiError> {
    let videos = state.video_service.list_for_user(auth.user_id).await?;
    Ok(Json(videos))
}

/// GET /api/videos/{video_id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(raw_video_id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let video_id = parse_video_id(&raw_video_id)?;
    let video = state.video_service.get(video_id).await.map_err(|e| match e.kind {
        ErrorKind::NotFound => e.into_kind(ErrorKind::NotFound, "Video not found"),
        _ => e.into_kind(ErrorKind::Internal, "Couldn't get video"),
    })?;
    Ok(Json(video))
}
