//! Property catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use estatehub_core::error::AppError;
use estatehub_core::types::PropertyId;

use crate::dto::response::{ApiResponse, PropertyDetail, PropertySummary};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /properties
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PropertySummary>>>, ApiError> {
    let galleries = state.property_service.list_galleries().await?;
    let summaries = galleries.iter().map(PropertySummary::from).collect();
    Ok(Json(ApiResponse::ok(summaries)))
}

/// GET /properties/{property_id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<PropertyDetail>>, ApiError> {
    let id: PropertyId = raw_id
        .parse()
        .map_err(|_| AppError::not_found(format!("Property {raw_id} not found")))?;
    let gallery = state.property_service.get_gallery(id).await?;
    Ok(Json(ApiResponse::ok(PropertyDetail::from(&gallery))))
}
