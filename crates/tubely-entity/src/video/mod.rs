//! Video entity and related types.

pub mod model;

pub use model::{CreateVideo, Video};
