//! A property together with its ordered photos.

use serde::Serialize;

use super::cover;
use super::model::Property;
use crate::photo::Photo;

/// A property and its photos, always ordered by ascending position.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyGallery {
    /// The property.
    pub property: Property,
    /// Photos in ascending position order.
    photos: Vec<Photo>,
}

impl PropertyGallery {
    /// Build a gallery, sorting photos by position.
    pub fn new(property: Property, mut photos: Vec<Photo>) -> Self {
        photos.sort_by_key(|p| p.position);
        Self { property, photos }
    }

    /// Photos in ascending position order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos.
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// The photo representing this property, if any.
    pub fn cover_photo(&self) -> Option<&Photo> {
        cover::cover_photo(&self.photos)
    }

    /// Whether the gallery has reached the cover threshold.
    pub fn has_cover_photo(&self) -> bool {
        cover::has_cover_photo(self.photos.len())
    }

    /// The advertised cover position.
    pub fn cover_photo_position(&self) -> i32 {
        cover::cover_photo_position(self.photos.len())
    }

    /// Whether `photo` is the current cover.
    pub fn is_cover(&self, photo: &Photo) -> bool {
        self.cover_photo().is_some_and(|c| c.id == photo.id)
    }
}
