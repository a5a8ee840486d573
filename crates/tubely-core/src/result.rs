//! Convenience result type alias for Tubely.

use crate::error::AppError;

/// A specialized `Result` type for Tubely operations.
pub type AppResult<T> = Result<T, AppError>;
