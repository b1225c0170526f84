//! Property CRUD and gallery assembly.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use validator::Validate;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_core::types::PropertyId;
use estatehub_database::CatalogStore;
use estatehub_entity::photo::Photo;
use estatehub_entity::property::{CreateProperty, Property, PropertyGallery};

/// Handles property creation, lookup, and deletion.
#[derive(Debug, Clone)]
pub struct PropertyService {
    /// Catalog store.
    store: Arc<dyn CatalogStore>,
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a property after validating its name.
    pub async fn create(&self, req: CreateProperty) -> AppResult<Property> {
        req.validate()?;
        let property = self.store.create_property(&req).await?;
        info!(property_id = %property.id, name = %property.name, "Property created");
        Ok(property)
    }

    /// Load a property and its photos.
    pub async fn get_gallery(&self, id: PropertyId) -> AppResult<PropertyGallery> {
        let property = self
            .store
            .find_property(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property {id} not found")))?;
        let photos = self.store.list_photos(id).await?;
        Ok(PropertyGallery::new(property, photos))
    }

    /// Load every property with its photos, ordered by property name.
    pub async fn list_galleries(&self) -> AppResult<Vec<PropertyGallery>> {
        let properties = self.store.list_properties().await?;
        let ids: Vec<PropertyId> = properties.iter().map(|p| p.id).collect();

        let mut by_property: HashMap<PropertyId, Vec<Photo>> = HashMap::new();
        for photo in self.store.list_photos_for(&ids).await? {
            by_property.entry(photo.property_id).or_default().push(photo);
        }

        Ok(properties
            .into_iter()
            .map(|property| {
                let photos = by_property.remove(&property.id).unwrap_or_default();
                PropertyGallery::new(property, photos)
            })
            .collect())
    }

    /// Delete a property together with its photo records.
    ///
    /// Backing files are left on disk.
    pub async fn delete(&self, id: PropertyId) -> AppResult<()> {
        if !self.store.delete_property(id).await? {
            return Err(AppError::not_found(format!("Property {id} not found")));
        }
        info!(property_id = %id, "Property deleted");
        Ok(())
    }
}
