//! PostgreSQL repositories for catalog entities.

pub mod photo;
pub mod property;

pub use photo::PhotoRepository;
pub use property::PropertyRepository;
