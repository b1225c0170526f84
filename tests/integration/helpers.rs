//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use bytes::Bytes;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use estatehub_api::{AppState, build_app};
use estatehub_core::config::{AppConfig, CatalogProvider};
use estatehub_core::types::PropertyId;
use estatehub_database::MemoryCatalogStore;
use estatehub_entity::photo::{CreatePhoto, Photo};
use estatehub_entity::property::{CreateProperty, Property};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for driving services directly
    pub state: AppState,
    /// In-memory catalog behind the router
    pub store: Arc<MemoryCatalogStore>,
    /// Temporary storage root; removed on drop
    pub storage_root: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty catalog and storage root
    pub async fn new() -> Self {
        let storage_root = tempfile::tempdir().expect("Failed to create storage root");

        let mut config = AppConfig::default();
        config.database.provider = CatalogProvider::Memory;
        config.storage.root_path = storage_root.path().to_string_lossy().into_owned();

        let store = Arc::new(MemoryCatalogStore::new());
        let storage = estatehub_storage::build_provider(&config.storage)
            .await
            .expect("Failed to open storage");

        let state = AppState::new(config, store.clone(), storage);
        let router = build_app(state.clone());

        Self {
            router,
            state,
            store,
            storage_root,
        }
    }

    /// Create a property through the service layer
    pub async fn create_property(&self, name: &str) -> Property {
        self.state
            .property_service
            .create(CreateProperty {
                name: name.to_string(),
            })
            .await
            .expect("Failed to create property")
    }

    /// Write a file into the storage layout without registering it
    pub fn write_file(&self, property_id: PropertyId, filename: &str, data: &[u8]) {
        let dir = self
            .storage_root
            .path()
            .join("photos")
            .join(property_id.to_string());
        std::fs::create_dir_all(&dir).expect("Failed to create photo dir");
        std::fs::write(dir.join(filename), data).expect("Failed to write photo file");
    }

    /// Register a photo record and write its backing file
    pub async fn add_photo(
        &self,
        property_id: PropertyId,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Photo {
        self.write_file(property_id, filename, data);
        self.register_photo(property_id, filename, content_type, data.len() as i64)
            .await
    }

    /// Register a photo record without writing any file
    pub async fn register_photo(
        &self,
        property_id: PropertyId,
        filename: &str,
        content_type: &str,
        file_size: i64,
    ) -> Photo {
        self.state
            .photo_service
            .add_photo(CreatePhoto {
                property_id,
                filename: filename.to_string(),
                content_type: content_type.to_string(),
                file_size,
                position: None,
            })
            .await
            .expect("Failed to add photo")
    }

    /// Send a GET request through the router
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
}

impl TestResponse {
    /// Header value as a string, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body parsed as JSON (`Null` when it is not JSON)
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}
