//! # tubely-database
//!
//! PostgreSQL connection management and the video datastore. The upload
//! flow depends only on the [`VideoStore`] trait; both the PostgreSQL and
//! the in-memory repository implement it.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryVideoRepository, PgVideoRepository, VideoCatalog, VideoStore};
