//! Application builder: wires collaborators, state and router, and runs
//! the HTTP server.

use std::sync::Arc;

use tracing::{error, info};

use tubely_auth::JwtDecoder;
use tubely_core::config::{AppConfig, DatabaseBackend};
use tubely_core::error::{AppError, ErrorKind};
use tubely_core::traits::BlobStore;
use tubely_database::repositories::{VideoCatalog, VideoStore};
use tubely_database::migration::run_migrations;
use tubely_database::{DatabasePool, MemoryVideoRepository, PgVideoRepository};
use tubely_storage::LocalBlobStore;

use crate::router::build_router;
use crate::state::AppState;

/// Build the application state for `config`.
///
/// Connects to PostgreSQL and applies pending migrations when that backend
/// is selected, and creates the assets root if missing.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    // ── Step 1: Datastore ────────────────────────────────────────
    let (video_store, video_catalog): (Arc<dyn VideoStore>, Arc<dyn VideoCatalog>) =
        match config.database.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(&config.database).await?;
                run_migrations(pool.pool()).await?;
                let repo = Arc::new(PgVideoRepository::new(pool.pool().clone()));
                (repo.clone() as Arc<dyn VideoStore>, repo as Arc<dyn VideoCatalog>)
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory video datastore; records are not persisted");
                let repo = Arc::new(MemoryVideoRepository::new());
                (repo.clone() as Arc<dyn VideoStore>, repo as Arc<dyn VideoCatalog>)
            }
        };

    // ── Step 2: Blob storage ─────────────────────────────────────
    let blob_store: Arc<dyn BlobStore> = Arc::new(
        LocalBlobStore::new(
            &config.storage.assets_root,
            &config.storage.assets_base_url,
        )
        .await?,
    );
    info!(
        assets_root = %config.storage.assets_root,
        assets_base_url = %config.storage.assets_base_url,
        "Thumbnail storage ready"
    );

    // ── Step 3: Auth ─────────────────────────────────────────────
    let authenticator = Arc::new(JwtDecoder::new(&config.auth));

    Ok(AppState::new(
        config,
        authenticator,
        video_store,
        video_catalog,
        blob_store,
    ))
}

/// Runs the Tubely server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Tubely server...");

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to bind listener", e))?;

    info!(address = %addr, "Tubely server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Tubely server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
