//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{ApiResponse, ComponentHealth, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /up
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /up/detailed
///
/// Responds 503 when either the catalog store or the storage root is down.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DetailedHealthResponse>>) {
    let database_ok = match state.store.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Catalog store health check failed");
            false
        }
    };
    let storage_ok = match state.storage.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Photo storage health check failed");
            false
        }
    };

    let healthy = database_ok && storage_ok;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse {
            success: healthy,
            data: DetailedHealthResponse {
                status: if healthy { "ok" } else { "degraded" }.to_string(),
                database: ComponentHealth {
                    provider: state.store.provider_name().to_string(),
                    healthy: database_ok,
                },
                storage: ComponentHealth {
                    provider: state.storage.provider_type().to_string(),
                    healthy: storage_ok,
                },
            },
        }),
    )
}
