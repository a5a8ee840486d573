//! Typed path parameter helpers.

use tubely_core::error::AppError;
use tubely_core::types::VideoId;

/// Parses a video id from a path segment.
pub fn parse_video_id(s: &str) -> Result<VideoId, AppError> {
    s.parse::<VideoId>()
        .map_err(|_| AppError::validation("Invalid video ID"))
}
