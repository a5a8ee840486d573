//! `migrate` command.

use tubely_core::config::{AppConfig, DatabaseBackend};
use tubely_core::error::AppError;
use tubely_database::DatabasePool;
use tubely_database::migration::run_migrations;

/// Connect to PostgreSQL and apply pending migrations
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != DatabaseBackend::Postgres {
        return Err(AppError::configuration(
            "Migrations require the postgres database backend",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let result = run_migrations(pool.pool()).await;
    pool.close().await;
    result?;

    println!("All migrations applied successfully.");
    Ok(())
}
