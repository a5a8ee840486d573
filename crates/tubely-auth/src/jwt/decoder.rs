//! Access token validation.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use tubely_core::config::AuthConfig;
use tubely_core::error::{AppError, ErrorKind};
use tubely_core::result::AppResult;
use tubely_core::traits::TokenAuthenticator;
use tubely_core::types::UserId;

use super::claims::Claims;

/// Clock skew tolerated when checking `exp`, in seconds.
const LEEWAY_SECONDS: u64 = 5;

/// Verifies HS256 access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECONDS;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate `token`, returning its claims.
    ///
    /// Checks the signature, expiry and issuer.
    pub fn decode_access_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let message = match e.kind() {
                    JwtErrorKind::ExpiredSignature => "Token has expired",
                    JwtErrorKind::InvalidSignature => "Invalid token signature",
                    JwtErrorKind::InvalidIssuer => "Invalid token issuer",
                    JwtErrorKind::InvalidToken => "Invalid token format",
                    _ => "Token validation failed",
                };
                debug!(reason = message, "Rejected access token");
                AppError::with_source(ErrorKind::Authentication, message, e)
            })
    }
}

#[async_trait]
impl TokenAuthenticator for JwtDecoder {
    async fn validate(&self, token: &str) -> AppResult<UserId> {
        self.decode_access_token(token).map(|claims| claims.user_id())
    }
}
