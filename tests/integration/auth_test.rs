//! Integration tests for bearer token handling.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};

use helpers::{TEST_SECRET, TestApp};
use tubely_auth::Claims;
use tubely_core::types::UserId;

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign claims")
}

fn claims_for(user: UserId, issuer: &str, exp_offset_secs: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        iss: issuer.to_string(),
        sub: user.into_uuid(),
        iat: now,
        exp: now + exp_offset_secs,
    }
}

#[tokio::test]
async fn test_issued_token_is_accepted() {
    let app = TestApp::new().await;
    let token = app.token_for(UserId::new());

    let response = app.request("GET", "/api/videos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let token = sign(
        &claims_for(UserId::new(), "tubely-access", 600),
        "some-other-secret",
    );

    let response = app.request("GET", "/api/videos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AUTHENTICATION");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let token = sign(
        &claims_for(UserId::new(), "tubely-access", -120),
        TEST_SECRET,
    );

    let response = app.request("GET", "/api/videos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_issuer_is_rejected() {
    let app = TestApp::new().await;
    let token = sign(&claims_for(UserId::new(), "someone-else", 600), TEST_SECRET);

    let response = app.request("GET", "/api/videos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = TestApp::new().await;
    let token = app.token_for(UserId::new());

    let req = http::Request::builder()
        .uri("/api/videos")
        .header("Authorization", format!("Token {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_body_does_not_leak_cause() {
    let app = TestApp::new().await;
    let token = sign(
        &claims_for(UserId::new(), "tubely-access", -120),
        TEST_SECRET,
    );

    let response = app.request("GET", "/api/videos", None, Some(&token)).await;

    assert_eq!(response.body["message"], "Couldn't validate JWT");
}
