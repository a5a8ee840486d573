//! # tubely-entity
//!
//! Domain entity models for Tubely. Database entities derive
//! `sqlx::FromRow` and serialize to camelCase JSON for the HTTP API.

pub mod video;

pub use video::{CreateVideo, Video};
