//! PostgreSQL-backed catalog store.

use async_trait::async_trait;

use estatehub_core::result::AppResult;
use estatehub_core::types::{PhotoId, PropertyId};
use estatehub_entity::photo::{NewPhoto, Photo};
use estatehub_entity::property::{CreateProperty, Property};

use super::CatalogStore;
use crate::connection::DatabasePool;
use crate::repositories::{PhotoRepository, PropertyRepository};

/// Catalog store delegating to the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    db: DatabasePool,
    properties: PropertyRepository,
    photos: PhotoRepository,
}

impl PgCatalogStore {
    /// Create a store over an open pool.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            db,
            properties: PropertyRepository::new(pool.clone()),
            photos: PhotoRepository::new(pool),
        }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    fn provider_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }

    async fn create_property(&self, data: &CreateProperty) -> AppResult<Property> {
        self.properties.create(data).await
    }

    async fn find_property(&self, id: PropertyId) -> AppResult<Option<Property>> {
        self.properties.find_by_id(id).await
    }

    async fn list_properties(&self) -> AppResult<Vec<Property>> {
        self.properties.list_by_name().await
    }

    async fn delete_property(&self, id: PropertyId) -> AppResult<bool> {
        self.properties.delete(id).await
    }

    async fn find_photo(
        &self,
        property_id: PropertyId,
        filename: &str,
    ) -> AppResult<Option<Photo>> {
        self.photos
            .find_by_property_and_filename(property_id, filename)
            .await
    }

    async fn list_photos(&self, property_id: PropertyId) -> AppResult<Vec<Photo>> {
        self.photos.list_by_property(property_id).await
    }

    async fn list_photos_for(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Photo>> {
        if property_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.photos.list_for_properties(property_ids).await
    }

    async fn max_position(&self, property_id: PropertyId) -> AppResult<Option<i32>> {
        self.photos.max_position(property_id).await
    }

    async fn insert_photo(&self, data: &NewPhoto) -> AppResult<Photo> {
        self.photos.create(data).await
    }

    async fn delete_photo(&self, id: PhotoId) -> AppResult<bool> {
        self.photos.delete(id).await
    }
}
