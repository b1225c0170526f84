//! Loads the backing file of a resolved photo.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use estatehub_core::error::ErrorKind;
use estatehub_core::result::AppResult;
use estatehub_core::traits::StorageProvider;
use estatehub_entity::photo::Photo;

/// File content and headers for an inline photo response.
#[derive(Debug, Clone)]
pub struct PhotoDownload {
    /// The photo record.
    pub photo: Photo,
    /// Full file content.
    pub data: Bytes,
    /// MIME type for the Content-Type header.
    pub content_type: String,
    /// Filename for the Content-Disposition header.
    pub filename: String,
}

/// Reads photo files from the storage provider.
#[derive(Debug, Clone)]
pub struct FileStreamer {
    /// Photo storage.
    storage: Arc<dyn StorageProvider>,
}

impl FileStreamer {
    /// Creates a new file streamer.
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Load the file behind `photo`.
    ///
    /// Returns `Ok(None)` when no regular file exists at the photo's path,
    /// including when it disappears between the existence check and the read.
    pub async fn stream(&self, photo: &Photo) -> AppResult<Option<PhotoDownload>> {
        let path = photo.storage_path();
        if !self.storage.exists(&path).await? {
            debug!(photo_id = %photo.id, path = %path, "Photo file missing");
            return Ok(None);
        }

        let data = match self.storage.read_bytes(&path).await {
            Ok(data) => data,
            Err(e) if e.is(ErrorKind::NotFound) => {
                debug!(photo_id = %photo.id, path = %path, "Photo file vanished before read");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(Some(PhotoDownload {
            photo: photo.clone(),
            data,
            content_type: photo.content_type.clone(),
            filename: photo.filename.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estatehub_core::types::{PhotoId, PropertyId};
    use estatehub_storage::LocalStorageProvider;

    fn photo(property_id: i64, filename: &str) -> Photo {
        let epoch = Default::default();
        Photo {
            id: PhotoId::new(1),
            property_id: PropertyId::new(property_id),
            filename: filename.into(),
            position: 1,
            content_type: "image/webp".into(),
            file_size: 3,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[tokio::test]
    async fn test_streams_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("photos/4")).unwrap();
        std::fs::write(dir.path().join("photos/4/yard.webp"), b"RIF").unwrap();
        let storage = LocalStorageProvider::open(dir.path().to_str().unwrap(), true)
            .await
            .unwrap();
        let streamer = FileStreamer::new(Arc::new(storage));

        let download = streamer
            .stream(&photo(4, "yard.webp"))
            .await
            .unwrap()
            .expect("file present");
        assert_eq!(download.data, Bytes::from_static(b"RIF"));
        assert_eq!(download.content_type, "image/webp");
        assert_eq!(download.filename, "yard.webp");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageProvider::open(dir.path().to_str().unwrap(), true)
            .await
            .unwrap();
        let streamer = FileStreamer::new(Arc::new(storage));
        assert!(streamer.stream(&photo(4, "gone.webp")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_directory_at_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("photos/4/folder.webp")).unwrap();
        let storage = LocalStorageProvider::open(dir.path().to_str().unwrap(), true)
            .await
            .unwrap();
        let streamer = FileStreamer::new(Arc::new(storage));
        assert!(streamer.stream(&photo(4, "folder.webp")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_storage_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorageProvider::open(
            dir.path().join("unmounted").to_str().unwrap(),
            false,
        )
        .await
        .unwrap();
        let streamer = FileStreamer::new(Arc::new(storage));

        let err = streamer.stream(&photo(4, "yard.webp")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
    }
}
