//! Video datastore traits and their implementations.

pub mod memory;
pub mod video;

use async_trait::async_trait;

use tubely_core::result::AppResult;
use tubely_core::types::{UserId, VideoId};
use tubely_entity::video::{CreateVideo, Video};

pub use memory::MemoryVideoRepository;
pub use video::PgVideoRepository;

/// Lookup and update of single video records.
///
/// This is all the thumbnail upload flow needs from the datastore.
#[async_trait]
pub trait VideoStore: Send + Sync + 'static {
    /// Fetch a video by id. Returns a `NotFound` error if it does not exist.
    async fn get(&self, id: VideoId) -> AppResult<Video>;

    /// Persist every mutable field of `video`, returning the stored record.
    async fn update(&self, video: &Video) -> AppResult<Video>;
}

/// Creation and listing of video records.
#[async_trait]
pub trait VideoCatalog: Send + Sync + 'static {
    /// Insert a new record.
    async fn create(&self, data: &CreateVideo) -> AppResult<Video>;

    /// All videos owned by `user_id`, newest first.
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Video>>;
}
