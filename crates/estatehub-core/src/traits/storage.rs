//! Storage provider trait for the filesystem that backs photo records.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type guessed from the extension (if known).
    pub mime_type: Option<String>,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Whether this is a directory.
    pub is_directory: bool,
}

/// Trait for read-only photo storage backends.
///
/// Paths are always relative to the provider's root and use `/` as the
/// separator. Implementations must refuse paths that would leave the root,
/// and must report an unreachable root as a `Storage` error rather than as
/// a missing file.
/// The [`StorageProvider`] trait is defined here in `estatehub-core` and
/// implemented in `estatehub-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file into memory as a complete byte buffer.
    ///
    /// A missing file is reported as an error of kind `NotFound`.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Check whether a regular file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Get metadata about a file or directory.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
