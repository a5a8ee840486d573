//! Bearer credential validation.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::UserId;

/// Validates an opaque bearer credential and resolves the user it belongs to.
///
/// Implementations return an `Authentication` error for any credential
/// that is malformed, expired, or otherwise not acceptable.
#[async_trait]
pub trait TokenAuthenticator: Send + Sync + 'static {
    /// Validate `token` and return the authenticated user.
    async fn validate(&self, token: &str) -> AppResult<UserId>;
}
