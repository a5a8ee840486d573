//! # tubely-auth
//!
//! Bearer token handling for Tubely.
//!
//! - `jwt::JwtEncoder` signs HS256 access tokens for a user.
//! - `jwt::JwtDecoder` verifies them and implements
//!   [`TokenAuthenticator`](tubely_core::traits::TokenAuthenticator).

pub mod jwt;

pub use jwt::{AccessToken, Claims, JwtDecoder, JwtEncoder};
