//! # estatehub-storage
//!
//! Storage provider implementations for EstateHub photo files. Photos live
//! under `<root>/photos/<property_id>/<filename>` on the local filesystem.

pub mod providers;

use std::sync::Arc;

use estatehub_core::config::StorageConfig;
use estatehub_core::result::AppResult;
use estatehub_core::traits::StorageProvider;

pub use providers::local::{LocalStorageProvider, guess_image_content_type};

/// Build the storage provider described by configuration.
pub async fn build_provider(config: &StorageConfig) -> AppResult<Arc<dyn StorageProvider>> {
    let provider = LocalStorageProvider::open(&config.root_path, config.create_root).await?;
    Ok(Arc::new(provider))
}
