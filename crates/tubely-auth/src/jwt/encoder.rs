//! Access token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::debug;

use tubely_core::config::AuthConfig;
use tubely_core::error::{AppError, ErrorKind};
use tubely_core::types::UserId;

use super::claims::Claims;

/// Signs HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    issuer: String,
    access_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .finish()
    }
}

/// A freshly signed access token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccessToken {
    /// The encoded JWT.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            access_ttl_minutes: i64::try_from(config.access_token_ttl_minutes)
                .unwrap_or(i64::MAX),
        }
    }

    /// Sign an access token whose subject is `user_id`.
    pub fn issue_access_token(&self, user_id: UserId) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let expires_at = chrono::Duration::try_minutes(self.access_ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::configuration("Access token TTL is out of range"))?;

        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user_id.into_uuid(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to sign access token", e)
        })?;

        debug!(user_id = %user_id, expires_at = %expires_at, "Issued access token");
        Ok(AccessToken { token, expires_at })
    }
}
