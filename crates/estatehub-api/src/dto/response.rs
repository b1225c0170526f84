//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estatehub_core::types::{PhotoId, PropertyId};
use estatehub_entity::photo::Photo;
use estatehub_entity::property::PropertyGallery;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Photo summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    /// Photo ID.
    pub id: PhotoId,
    /// Owning property.
    pub property_id: PropertyId,
    /// Filename.
    pub filename: String,
    /// Display position.
    pub position: i32,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Public URL of the file.
    pub url: String,
    /// Whether this photo is the property's cover.
    pub is_cover: bool,
}

impl PhotoResponse {
    fn from_photo(photo: &Photo, is_cover: bool) -> Self {
        Self {
            id: photo.id,
            property_id: photo.property_id,
            filename: photo.filename.clone(),
            position: photo.position,
            content_type: photo.content_type.clone(),
            file_size: photo.file_size,
            url: photo.url(),
            is_cover,
        }
    }
}

/// Property entry in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Property ID.
    pub id: PropertyId,
    /// Name.
    pub name: String,
    /// Number of photos.
    pub photo_count: usize,
    /// Whether the gallery is large enough for the designated cover slot.
    pub has_cover_photo: bool,
    /// Advertised cover position.
    pub cover_photo_position: i32,
    /// The cover photo, if the property has any photos.
    pub cover_photo: Option<PhotoResponse>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<&PropertyGallery> for PropertySummary {
    fn from(gallery: &PropertyGallery) -> Self {
        Self {
            id: gallery.property.id,
            name: gallery.property.name.clone(),
            photo_count: gallery.photo_count(),
            has_cover_photo: gallery.has_cover_photo(),
            cover_photo_position: gallery.cover_photo_position(),
            cover_photo: gallery
                .cover_photo()
                .map(|p| PhotoResponse::from_photo(p, true)),
            created_at: gallery.property.created_at,
            updated_at: gallery.property.updated_at,
        }
    }
}

/// Property detail with all photos in position order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetail {
    /// Summary fields.
    #[serde(flatten)]
    pub summary: PropertySummary,
    /// Photos in position order.
    pub photos: Vec<PhotoResponse>,
}

impl From<&PropertyGallery> for PropertyDetail {
    fn from(gallery: &PropertyGallery) -> Self {
        Self {
            summary: PropertySummary::from(gallery),
            photos: gallery
                .photos()
                .iter()
                .map(|p| PhotoResponse::from_photo(p, gallery.is_cover(p)))
                .collect(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Build version.
    pub version: String,
}

/// Readiness response covering backing resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Catalog store backend and state.
    pub database: ComponentHealth,
    /// Photo storage backend and state.
    pub storage: ComponentHealth,
}

/// Health of a single backing component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Backend name.
    pub provider: String,
    /// Whether the component responded.
    pub healthy: bool,
}
