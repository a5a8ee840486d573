//! Video record management.

pub mod service;

pub use service::VideoService;
