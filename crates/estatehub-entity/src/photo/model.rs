//! Photo entity model.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use estatehub_core::types::{PhotoId, PropertyId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::content_type::PhotoContentType;
use super::filename::check_flat_filename;

/// Upper bound (exclusive) on a photo's byte size: 10 MiB.
pub const MAX_FILE_SIZE_BYTES: i64 = 10 * 1024 * 1024;

/// A photo attached to a property listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: PhotoId,
    /// The owning property.
    pub property_id: PropertyId,
    /// The stored file name; a single flat path segment.
    pub filename: String,
    /// 1-based display position, unique within the owning property.
    pub position: i32,
    /// Declared MIME type.
    pub content_type: String,
    /// Declared size in bytes.
    pub file_size: i64,
    /// When the photo was created.
    pub created_at: DateTime<Utc>,
    /// When the photo was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    /// Path of the backing file relative to the storage root.
    pub fn storage_path(&self) -> String {
        storage_path(self.property_id, &self.filename)
    }

    /// Public URL the photo is served under.
    pub fn url(&self) -> String {
        format!("/photos/{}/{}", self.property_id, self.filename)
    }
}

/// Storage-relative path for a photo file: `photos/<property_id>/<filename>`.
pub fn storage_path(property_id: PropertyId, filename: &str) -> String {
    format!("photos/{property_id}/{filename}")
}

/// Data required to create a new photo record.
///
/// When `position` is `None` the next free position is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhoto {
    /// The owning property.
    pub property_id: PropertyId,
    /// File name of the photo.
    #[validate(
        length(min = 1, max = 255, message = "filename must be 1 to 255 characters"),
        custom(function = "validate_filename")
    )]
    pub filename: String,
    /// Declared MIME type.
    #[validate(custom(function = "validate_content_type"))]
    pub content_type: String,
    /// Declared size in bytes.
    #[validate(range(
        min = 1,
        max = 10485759,
        message = "file size must be greater than 0 and less than 10 MB"
    ))]
    pub file_size: i64,
    /// Explicit display position.
    #[validate(range(min = 1, message = "position must be greater than 0"))]
    #[serde(default)]
    pub position: Option<i32>,
}

/// A fully resolved photo row ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    /// The owning property.
    pub property_id: PropertyId,
    /// File name of the photo.
    pub filename: String,
    /// Assigned position.
    pub position: i32,
    /// Declared MIME type.
    pub content_type: String,
    /// Declared size in bytes.
    pub file_size: i64,
}

impl NewPhoto {
    /// Build an insertable row from a validated request and a position.
    pub fn from_request(req: &CreatePhoto, position: i32) -> Self {
        Self {
            property_id: req.property_id,
            filename: req.filename.clone(),
            position,
            content_type: req.content_type.clone(),
            file_size: req.file_size,
        }
    }
}

fn validate_filename(value: &str) -> Result<(), ValidationError> {
    check_flat_filename(value).map_err(|e| {
        ValidationError::new("flat_filename").with_message(Cow::Owned(e.to_string()))
    })
}

fn validate_content_type(value: &str) -> Result<(), ValidationError> {
    if PhotoContentType::is_allowed(value) {
        Ok(())
    } else {
        Err(ValidationError::new("content_type")
            .with_message(Cow::Borrowed("content type must be jpeg, jpg, png, or webp")))
    }
}
