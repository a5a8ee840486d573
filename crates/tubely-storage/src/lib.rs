//! # tubely-storage
//!
//! Thumbnail file naming and the local filesystem [`BlobStore`].
//!
//! [`BlobStore`]: tubely_core::traits::BlobStore

pub mod naming;
pub mod providers;

pub use naming::{StoredFile, ThumbnailFormat, random_file_name};
pub use providers::LocalBlobStore;
