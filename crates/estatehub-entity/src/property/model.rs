//! Property entity model.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use estatehub_core::types::PropertyId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A real-estate listing that owns an ordered set of photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// When the property was created.
    pub created_at: DateTime<Utc>,
    /// When the property was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProperty {
    /// Display name (2 to 100 characters).
    #[validate(
        length(min = 2, max = 100, message = "name must be 2 to 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("name can't be blank")));
    }
    Ok(())
}
