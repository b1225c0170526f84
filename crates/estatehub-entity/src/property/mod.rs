//! Property domain entities.

pub mod cover;
pub mod gallery;
pub mod model;

pub use cover::{COVER_POSITION, COVER_THRESHOLD, cover_photo, cover_photo_position, has_cover_photo};
pub use gallery::PropertyGallery;
pub use model::{CreateProperty, Property};
