//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use estatehub_core::config::AppConfig;
use estatehub_core::traits::StorageProvider;
use estatehub_database::CatalogStore;
use estatehub_service::{AssetResolver, FileStreamer, PhotoService, PropertyService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Catalog store (PostgreSQL or in-memory)
    pub store: Arc<dyn CatalogStore>,
    /// Photo file storage
    pub storage: Arc<dyn StorageProvider>,

    // ── Services ─────────────────────────────────────────────
    /// Property catalog service
    pub property_service: Arc<PropertyService>,
    /// Photo record service
    pub photo_service: Arc<PhotoService>,
    /// Public URL to photo record resolution
    pub resolver: Arc<AssetResolver>,
    /// Photo file loading
    pub streamer: Arc<FileStreamer>,
}

impl AppState {
    /// Wire services over a catalog store and a storage provider.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn CatalogStore>,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            property_service: Arc::new(PropertyService::new(Arc::clone(&store))),
            photo_service: Arc::new(PhotoService::new(Arc::clone(&store))),
            resolver: Arc::new(AssetResolver::new(Arc::clone(&store))),
            streamer: Arc::new(FileStreamer::new(Arc::clone(&storage))),
            store,
            storage,
        }
    }
}
