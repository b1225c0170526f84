//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;

/// Apply pending catalog migrations (properties and photos tables).
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Applying catalog migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Catalog schema is up to date");
    Ok(())
}
