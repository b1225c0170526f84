//! Photo creation with position assignment, listing, and deletion.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;
use estatehub_core::types::PropertyId;
use estatehub_database::CatalogStore;
use estatehub_entity::photo::{CreatePhoto, NewPhoto, Photo, next_position};

/// Handles photo records for a property.
#[derive(Debug, Clone)]
pub struct PhotoService {
    /// Catalog store.
    store: Arc<dyn CatalogStore>,
}

impl PhotoService {
    /// Creates a new photo service.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a photo record.
    ///
    /// An explicit position is stored as given and a taken one is a
    /// validation error. Without a position the next free one is assigned;
    /// if a concurrent insert claims it first the assignment is recomputed
    /// once before the conflict is returned.
    pub async fn add_photo(&self, req: CreatePhoto) -> AppResult<Photo> {
        req.validate()?;

        if self.store.find_property(req.property_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Property {} not found",
                req.property_id
            )));
        }

        let photo = match req.position {
            Some(position) => self
                .store
                .insert_photo(&NewPhoto::from_request(&req, position))
                .await
                .map_err(|e| {
                    if e.is(ErrorKind::Conflict) {
                        AppError::validation(format!("Position {position} has already been taken"))
                    } else {
                        e
                    }
                })?,
            None => match self.insert_at_next_position(&req).await {
                Err(e) if e.is(ErrorKind::Conflict) => {
                    warn!(
                        property_id = %req.property_id,
                        filename = %req.filename,
                        "Position taken by a concurrent insert, retrying once"
                    );
                    self.insert_at_next_position(&req).await?
                }
                other => other?,
            },
        };

        info!(
            property_id = %photo.property_id,
            photo_id = %photo.id,
            position = photo.position,
            "Photo added"
        );
        Ok(photo)
    }

    async fn insert_at_next_position(&self, req: &CreatePhoto) -> AppResult<Photo> {
        let position = next_position(self.store.max_position(req.property_id).await?)?;
        self.store
            .insert_photo(&NewPhoto::from_request(req, position))
            .await
    }

    /// List a property's photos in position order.
    pub async fn list_photos(&self, property_id: PropertyId) -> AppResult<Vec<Photo>> {
        if self.store.find_property(property_id).await?.is_none() {
            return Err(AppError::not_found(format!("Property {property_id} not found")));
        }
        self.store.list_photos(property_id).await
    }

    /// Delete a photo record by its property and filename.
    ///
    /// The backing file is left on disk.
    pub async fn delete_photo(&self, property_id: PropertyId, filename: &str) -> AppResult<()> {
        let photo = self
            .store
            .find_photo(property_id, filename)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Photo '{filename}' not found")))?;
        self.store.delete_photo(photo.id).await?;
        info!(property_id = %property_id, photo_id = %photo.id, "Photo deleted");
        Ok(())
    }
}
