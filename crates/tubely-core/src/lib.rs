//! # tubely-core
//!
//! Core crate for Tubely. Contains the collaborator traits the upload flow
//! is built against, configuration schemas, typed identifiers, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Tubely crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
