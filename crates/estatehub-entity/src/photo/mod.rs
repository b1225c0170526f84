//! Photo domain entities.

pub mod content_type;
pub mod filename;
pub mod model;
pub mod position;

pub use content_type::PhotoContentType;
pub use filename::{FilenameError, check_flat_filename};
pub use model::{CreatePhoto, MAX_FILE_SIZE_BYTES, NewPhoto, Photo, storage_path};
pub use position::next_position;
