//! # estatehub-service
//!
//! Business logic service layer for EstateHub. Services orchestrate the
//! catalog store and the photo storage provider to implement the listing
//! use cases: managing properties and photos, resolving a public photo URL to
//! its record, and streaming the backing file.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod photo;
pub mod property;

pub use photo::{AssetResolver, FileStreamer, PhotoDownload, PhotoService};
pub use property::PropertyService;
