//! Collaborator traits defined in `tubely-core` and implemented by other crates.
//!
//! The upload flow is written against these so each collaborator can be
//! substituted with an in-memory fake.

pub mod auth;
pub mod storage;

pub use auth::TokenAuthenticator;
pub use storage::{BlobStore, ByteStream};
