//! Photo management, resolution, and streaming.

pub mod resolver;
pub mod service;
pub mod streamer;

pub use resolver::AssetResolver;
pub use service::PhotoService;
pub use streamer::{FileStreamer, PhotoDownload};
