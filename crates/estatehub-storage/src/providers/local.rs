//! Local filesystem storage provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, info, warn};

use estatehub_core::error::{AppError, ErrorKind};
use estatehub_core::result::AppResult;
use estatehub_core::traits::storage::{StorageObjectMeta, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored files.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Open a provider rooted at `root_path`, creating the directory when
    /// `create_root` is set.
    pub async fn open(root_path: &str, create_root: bool) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        if create_root {
            fs::create_dir_all(&root).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create storage root: {}", root.display()),
                    e,
                )
            })?;
        }
        info!(root = %root.display(), "Opened local photo storage");
        Ok(Self { root })
    }

    /// Resolve a relative path to an absolute path within the root.
    ///
    /// Only plain segments are accepted; `..`, `.`, roots and drive prefixes
    /// are refused so no input can address a file outside the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        let mut segments = 0usize;
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    segments += 1;
                }
                _ => {
                    return Err(AppError::validation(format!(
                        "Storage path escapes the root: {path}"
                    )));
                }
            }
        }
        if segments == 0 {
            return Err(AppError::validation("Storage path is empty"));
        }
        Ok(resolved)
    }

    /// Fail with a `Storage` error unless the root is a reachable directory.
    ///
    /// A missing root means the volume is gone, not that a file is absent.
    async fn ensure_root(&self) -> AppResult<()> {
        match fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(AppError::storage(format!(
                "Storage root is not a directory: {}",
                self.root.display()
            ))),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Storage root unreachable: {}", self.root.display()),
                e,
            )),
        }
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.ensure_root().await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Photo storage root unavailable");
                Ok(false)
            }
        }
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        self.ensure_root().await?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {path}"),
                    e,
                )
            }
        })?;
        debug!(path, bytes = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        self.ensure_root().await?;
        match fs::metadata(&full_path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat file: {path}"),
                e,
            )),
        }
    }

    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta> {
        let full_path = self.resolve(path)?;
        self.ensure_root().await?;
        let meta = fs::metadata(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Path not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to get metadata: {path}"),
                    e,
                )
            }
        })?;

        let last_modified = meta.modified().ok().map(chrono::DateTime::<chrono::Utc>::from);
        let mime_type = if meta.is_file() {
            guess_image_content_type(path).map(str::to_string)
        } else {
            None
        };

        Ok(StorageObjectMeta {
            path: path.to_string(),
            size_bytes: meta.len(),
            mime_type,
            last_modified,
            is_directory: meta.is_dir(),
        })
    }
}

/// Guess an image MIME type from a file path extension.
///
/// Only the formats photos may be stored in are recognised.
pub fn guess_image_content_type(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
