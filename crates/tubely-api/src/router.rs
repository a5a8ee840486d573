//! Route definitions for the Tubely HTTP API.
//!
//! API routes are mounted under `/api`; stored thumbnails are served from
//! `/assets`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Mount point of the asset directory.
pub const ASSETS_PATH: &str = "/assets";

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.storage.upload_limit_bytes;
    let assets = ServeDir::new(&state.config.storage.assets_root);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(thumbnail_routes(upload_limit))
        .merge(video_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest_service(ASSETS_PATH, assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Thumbnail upload. The body is streamed to disk, so axum's default 2 MB
/// cap is lifted unless a ceiling is configured.
fn thumbnail_routes(limit: Option<usize>) -> Router<AppState> {
    let body_limit = match limit {
        Some(max_bytes) => DefaultBodyLimit::max(max_bytes),
        None => DefaultBodyLimit::disable(),
    };

    Router::new().route(
        "/thumbnail_upload/{video_id}",
        post(handlers::thumbnail::upload_thumbnail).layer(body_limit),
    )
}

/// Video records
fn video_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/videos",
            get(handlers::video::list_videos).post(handlers::video::create_video),
        )
        .route("/videos/{video_id}", get(handlers::video::get_video))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
