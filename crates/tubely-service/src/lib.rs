//! # tubely-service
//!
//! Business logic for Tubely. Services orchestrate the datastore and blob
//! store collaborators and enforce ownership; HTTP concerns stay in
//! `tubely-api`.

pub mod thumbnail;
pub mod video;

pub use thumbnail::{ThumbnailService, ThumbnailUpload};
pub use video::VideoService;
