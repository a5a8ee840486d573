//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header and resolves it through the configured authenticator.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use tubely_core::error::{AppError, ErrorKind};
use tubely_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// Subject of the validated token.
    pub user_id: UserId,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Couldn't find JWT"))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::authentication("Couldn't find JWT"))?;

    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let user_id = state
            .authenticator
            .validate(token)
            .await
            .map_err(|e| e.into_kind(ErrorKind::Authentication, "Couldn't validate JWT"))?;

        Ok(AuthUser { user_id })
    }
}
