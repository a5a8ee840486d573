//! HTTP request handlers.

pub mod health;
pub mod thumbnail;
pub mod video;
