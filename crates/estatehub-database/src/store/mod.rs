//! The catalog store seam used by the service layer.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use estatehub_core::result::AppResult;
use estatehub_core::types::{PhotoId, PropertyId};
use estatehub_entity::photo::{NewPhoto, Photo};
use estatehub_entity::property::{CreateProperty, Property};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Persistence for properties and their photos.
///
/// Every implementation must hold these rules:
/// - `(property_id, position)` and `(property_id, filename)` are unique;
///   inserting a taken position fails with `Conflict`, a taken filename with
///   `Validation`, and an unknown property with `NotFound`.
/// - Photo listings are ordered by ascending position.
/// - Deleting a property removes its photos atomically.
/// - An unreachable backend surfaces as an error of kind `Database`, never
///   as an empty result.
#[async_trait]
pub trait CatalogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name (e.g., "postgres").
    fn provider_name(&self) -> &'static str;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Insert a property. Input is expected to be validated already.
    async fn create_property(&self, data: &CreateProperty) -> AppResult<Property>;

    /// Find a property by id.
    async fn find_property(&self, id: PropertyId) -> AppResult<Option<Property>>;

    /// List all properties ordered by name.
    async fn list_properties(&self) -> AppResult<Vec<Property>>;

    /// Delete a property and its photos. Returns `false` if it did not exist.
    async fn delete_property(&self, id: PropertyId) -> AppResult<bool>;

    /// Find the photo with exactly `filename` under `property_id`.
    async fn find_photo(&self, property_id: PropertyId, filename: &str)
    -> AppResult<Option<Photo>>;

    /// List a property's photos in position order.
    async fn list_photos(&self, property_id: PropertyId) -> AppResult<Vec<Photo>>;

    /// List photos for several properties, ordered by property then position.
    async fn list_photos_for(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Photo>>;

    /// Highest committed position under a property.
    async fn max_position(&self, property_id: PropertyId) -> AppResult<Option<i32>>;

    /// Insert a photo with an already resolved position.
    async fn insert_photo(&self, data: &NewPhoto) -> AppResult<Photo>;

    /// Delete a photo by id. Returns `false` if it did not exist.
    async fn delete_photo(&self, id: PhotoId) -> AppResult<bool>;
}
