//! In-memory catalog store using a Tokio `RwLock` for single-node use.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_core::types::{PhotoId, PropertyId};
use estatehub_entity::photo::{NewPhoto, Photo};
use estatehub_entity::property::{CreateProperty, Property};

use super::CatalogStore;

/// Internal state for the memory catalog.
#[derive(Debug, Default)]
struct InnerState {
    properties: BTreeMap<PropertyId, Property>,
    photos: HashMap<PhotoId, Photo>,
    /// `(property, filename)` → photo, mirrors the filename unique key.
    by_filename: HashMap<(PropertyId, String), PhotoId>,
    /// `(property, position)` → photo, mirrors the position unique key.
    by_position: HashMap<(PropertyId, i32), PhotoId>,
    last_property_id: i64,
    last_photo_id: i64,
}

impl InnerState {
    fn photos_of(&self, property_id: PropertyId) -> Vec<Photo> {
        let mut photos: Vec<Photo> = self
            .photos
            .values()
            .filter(|p| p.property_id == property_id)
            .cloned()
            .collect();
        photos.sort_by_key(|p| p.position);
        photos
    }

    fn remove_photo(&mut self, id: PhotoId) -> Option<Photo> {
        let photo = self.photos.remove(&id)?;
        self.by_filename
            .remove(&(photo.property_id, photo.filename.clone()));
        self.by_position.remove(&(photo.property_id, photo.position));
        Some(photo)
    }
}

/// Catalog store that keeps properties and photos in process memory.
///
/// Every mutation runs under a single write lock, so the uniqueness checks
/// and the insert they guard are atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    state: Arc<RwLock<InnerState>>,
    offline: Arc<AtomicBool>,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the backend were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::database("Catalog store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.ensure_online()?;
        Ok(true)
    }

    async fn create_property(&self, data: &CreateProperty) -> AppResult<Property> {
        self.ensure_online()?;
        let mut state = self.state.write().await;
        state.last_property_id += 1;
        let now = Utc::now();
        let property = Property {
            id: PropertyId::new(state.last_property_id),
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn find_property(&self, id: PropertyId) -> AppResult<Option<Property>> {
        self.ensure_online()?;
        Ok(self.state.read().await.properties.get(&id).cloned())
    }

    async fn list_properties(&self) -> AppResult<Vec<Property>> {
        self.ensure_online()?;
        let state = self.state.read().await;
        let mut properties: Vec<Property> = state.properties.values().cloned().collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(properties)
    }

    async fn delete_property(&self, id: PropertyId) -> AppResult<bool> {
        self.ensure_online()?;
        let mut state = self.state.write().await;
        if state.properties.remove(&id).is_none() {
            return Ok(false);
        }
        let owned: Vec<PhotoId> = state
            .photos
            .values()
            .filter(|p| p.property_id == id)
            .map(|p| p.id)
            .collect();
        for photo_id in owned {
            state.remove_photo(photo_id);
        }
        Ok(true)
    }

    async fn find_photo(
        &self,
        property_id: PropertyId,
        filename: &str,
    ) -> AppResult<Option<Photo>> {
        self.ensure_online()?;
        let state = self.state.read().await;
        Ok(state
            .by_filename
            .get(&(property_id, filename.to_string()))
            .and_then(|id| state.photos.get(id))
            .cloned())
    }

    async fn list_photos(&self, property_id: PropertyId) -> AppResult<Vec<Photo>> {
        self.ensure_online()?;
        Ok(self.state.read().await.photos_of(property_id))
    }

    async fn list_photos_for(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Photo>> {
        self.ensure_online()?;
        let state = self.state.read().await;
        let mut ids = property_ids.to_vec();
        ids.sort();
        ids.dedup();
        Ok(ids.into_iter().flat_map(|id| state.photos_of(id)).collect())
    }

    async fn max_position(&self, property_id: PropertyId) -> AppResult<Option<i32>> {
        self.ensure_online()?;
        let state = self.state.read().await;
        Ok(state
            .photos
            .values()
            .filter(|p| p.property_id == property_id)
            .map(|p| p.position)
            .max())
    }

    async fn insert_photo(&self, data: &NewPhoto) -> AppResult<Photo> {
        self.ensure_online()?;
        let mut state = self.state.write().await;

        if !state.properties.contains_key(&data.property_id) {
            return Err(AppError::not_found(format!(
                "Property {} not found",
                data.property_id
            )));
        }
        if data.position <= 0 {
            return Err(AppError::validation("Position must be greater than 0"));
        }
        if state
            .by_position
            .contains_key(&(data.property_id, data.position))
        {
            return Err(AppError::conflict(format!(
                "Position {} has already been taken",
                data.position
            )));
        }
        let filename_key = (data.property_id, data.filename.clone());
        if state.by_filename.contains_key(&filename_key) {
            return Err(AppError::validation(format!(
                "Filename '{}' has already been taken",
                data.filename
            )));
        }

        state.last_photo_id += 1;
        let now = Utc::now();
        let photo = Photo {
            id: PhotoId::new(state.last_photo_id),
            property_id: data.property_id,
            filename: data.filename.clone(),
            position: data.position,
            content_type: data.content_type.clone(),
            file_size: data.file_size,
            created_at: now,
            updated_at: now,
        };
        state.by_filename.insert(filename_key, photo.id);
        state
            .by_position
            .insert((photo.property_id, photo.position), photo.id);
        state.photos.insert(photo.id, photo.clone());
        Ok(photo)
    }

    async fn delete_photo(&self, id: PhotoId) -> AppResult<bool> {
        self.ensure_online()?;
        Ok(self.state.write().await.remove_photo(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estatehub_core::error::ErrorKind;

    async fn seeded() -> (MemoryCatalogStore, Property) {
        let store = MemoryCatalogStore::new();
        let property = store
            .create_property(&CreateProperty {
                name: "Cedar Court".into(),
            })
            .await
            .expect("create property");
        (store, property)
    }

    fn new_photo(property_id: PropertyId, filename: &str, position: i32) -> NewPhoto {
        NewPhoto {
            property_id,
            filename: filename.to_string(),
            position,
            content_type: "image/jpeg".to_string(),
            file_size: 512,
        }
    }

    #[tokio::test]
    async fn test_duplicate_position_is_conflict() {
        let (store, property) = seeded().await;
        store
            .insert_photo(&new_photo(property.id, "a.jpg", 1))
            .await
            .expect("first insert");
        let err = store
            .insert_photo(&new_photo(property.id, "b.jpg", 1))
            .await
            .expect_err("duplicate position");
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_duplicate_filename_is_validation() {
        let (store, property) = seeded().await;
        store
            .insert_photo(&new_photo(property.id, "a.jpg", 1))
            .await
            .expect("first insert");
        let err = store
            .insert_photo(&new_photo(property.id, "a.jpg", 2))
            .await
            .expect_err("duplicate filename");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_same_position_on_other_property_is_fine() {
        let (store, first) = seeded().await;
        let second = store
            .create_property(&CreateProperty {
                name: "Birch Lane".into(),
            })
            .await
            .expect("create property");
        store
            .insert_photo(&new_photo(first.id, "a.jpg", 1))
            .await
            .expect("insert");
        store
            .insert_photo(&new_photo(second.id, "a.jpg", 1))
            .await
            .expect("same filename and position on another property");
    }

    #[tokio::test]
    async fn test_unknown_property_is_not_found() {
        let store = MemoryCatalogStore::new();
        let err = store
            .insert_photo(&new_photo(PropertyId::new(99), "a.jpg", 1))
            .await
            .expect_err("no property");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_lists_in_position_order() {
        let (store, property) = seeded().await;
        for (name, pos) in [("c.jpg", 3), ("a.jpg", 1), ("b.jpg", 2)] {
            store
                .insert_photo(&new_photo(property.id, name, pos))
                .await
                .expect("insert");
        }
        let positions: Vec<i32> = store
            .list_photos(property.id)
            .await
            .expect("list")
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(store.max_position(property.id).await.expect("max"), Some(3));
    }

    #[tokio::test]
    async fn test_delete_property_cascades() {
        let (store, property) = seeded().await;
        store
            .insert_photo(&new_photo(property.id, "a.jpg", 1))
            .await
            .expect("insert");
        assert!(store.delete_property(property.id).await.expect("delete"));
        assert!(
            store
                .find_photo(property.id, "a.jpg")
                .await
                .expect("find")
                .is_none()
        );
        assert!(store.list_photos(property.id).await.expect("list").is_empty());
        assert!(!store.delete_property(property.id).await.expect("delete again"));
    }

    #[tokio::test]
    async fn test_offline_surfaces_database_error() {
        let (store, property) = seeded().await;
        store.set_offline(true);
        let err = store
            .find_property(property.id)
            .await
            .expect_err("offline");
        assert_eq!(err.kind, ErrorKind::Database);
        store.set_offline(false);
        assert!(store.find_property(property.id).await.expect("online").is_some());
    }

    #[tokio::test]
    async fn test_properties_ordered_by_name() {
        let store = MemoryCatalogStore::new();
        for name in ["Zinnia Flats", "Aspen Ridge", "Magnolia"] {
            store
                .create_property(&CreateProperty { name: name.into() })
                .await
                .expect("create");
        }
        let names: Vec<String> = store
            .list_properties()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Aspen Ridge", "Magnolia", "Zinnia Flats"]);
    }
}
