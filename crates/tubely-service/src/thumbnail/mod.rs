//! Thumbnail upload.

pub mod service;

pub use service::{ThumbnailService, ThumbnailUpload};
