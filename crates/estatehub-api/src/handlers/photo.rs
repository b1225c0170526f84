//! Photo file serving.

use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use estatehub_core::error::AppError;
use estatehub_service::PhotoDownload;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /photos/{property_id}/{filename}
/// GET /properties/{property_id}/photos/{filename}
///
/// Every reason the photo cannot be served yields the same bare 404.
/// Catalog or filesystem outages surface as 503.
pub async fn show_photo(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Ok(Path((property_id, filename))) = path else {
        debug!("Photo path could not be decoded");
        return Ok(not_found());
    };

    let Some(photo) = state.resolver.resolve(&property_id, &filename).await? else {
        return Ok(not_found());
    };

    match state.streamer.stream(&photo).await? {
        Some(download) => Ok(inline_response(download)?),
        None => Ok(not_found()),
    }
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

fn inline_response(download: PhotoDownload) -> Result<Response, AppError> {
    let content_type = HeaderValue::from_str(&download.content_type).map_err(|e| {
        AppError::internal(format!("Invalid stored content type: {e}"))
    })?;
    let disposition = HeaderValue::from_bytes(content_disposition(&download.filename).as_bytes())
        .map_err(|e| AppError::internal(format!("Invalid filename header: {e}")))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(header::CONTENT_LENGTH, download.data.len())
        .body(Body::from(download.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}

/// `inline; filename="..."` with `"` and `\` backslash-escaped.
pub fn content_disposition(filename: &str) -> String {
    let mut escaped = String::with_capacity(filename.len());
    for ch in filename.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("inline; filename=\"{escaped}\"")
}
