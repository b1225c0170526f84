//! # estatehub-database
//!
//! Persistence for properties and photos. The [`CatalogStore`] trait is the
//! seam the services depend on; [`PgCatalogStore`] backs it with PostgreSQL
//! repositories and [`MemoryCatalogStore`] keeps everything in process for
//! tests and single-node demos. Both enforce the same uniqueness rules.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

use std::sync::Arc;

use tracing::info;

use estatehub_core::config::{CatalogProvider, DatabaseConfig};
use estatehub_core::result::AppResult;

pub use connection::DatabasePool;
pub use store::{CatalogStore, MemoryCatalogStore, PgCatalogStore};

/// Build the catalog store selected by configuration.
///
/// For PostgreSQL this connects the pool and, when `auto_migrate` is set,
/// applies pending migrations before returning.
pub async fn connect_store(config: &DatabaseConfig) -> AppResult<Arc<dyn CatalogStore>> {
    match config.provider {
        CatalogProvider::Postgres => {
            let db = DatabasePool::connect(config).await?;
            if config.auto_migrate {
                migration::run_migrations(db.pool()).await?;
            }
            Ok(Arc::new(PgCatalogStore::new(db)))
        }
        CatalogProvider::Memory => {
            info!("Using in-memory catalog store");
            Ok(Arc::new(MemoryCatalogStore::new()))
        }
    }
}
