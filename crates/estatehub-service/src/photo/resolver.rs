//! Maps a public photo URL to its photo record.

use std::sync::Arc;

use tracing::debug;

use estatehub_core::result::AppResult;
use estatehub_core::types::PropertyId;
use estatehub_database::CatalogStore;
use estatehub_entity::photo::{Photo, check_flat_filename};

/// Resolves `(property id, filename)` path segments to a photo record.
///
/// Every reason a request cannot be served (malformed id, unknown property,
/// unusable filename, unknown photo) is reported the same way as `Ok(None)`.
/// Only backend failures are errors.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    /// Catalog store.
    store: Arc<dyn CatalogStore>,
}

impl AssetResolver {
    /// Creates a new asset resolver.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Resolve raw path segments to the photo they name.
    pub async fn resolve(&self, raw_property_id: &str, raw_filename: &str) -> AppResult<Option<Photo>> {
        let Ok(property_id) = raw_property_id.parse::<PropertyId>() else {
            debug!(property_id = %raw_property_id, "Rejected malformed property id");
            return Ok(None);
        };

        if self.store.find_property(property_id).await?.is_none() {
            debug!(property_id = %property_id, "Unknown property");
            return Ok(None);
        }

        if let Err(reason) = check_flat_filename(raw_filename) {
            debug!(
                property_id = %property_id,
                filename = ?raw_filename,
                %reason,
                "Rejected photo filename"
            );
            return Ok(None);
        }

        let photo = self.store.find_photo(property_id, raw_filename).await?;
        if photo.is_none() {
            debug!(property_id = %property_id, filename = ?raw_filename, "Unknown photo");
        }
        Ok(photo)
    }
}
