//! Route definitions for the EstateHub HTTP API.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes, threading `AppState` to every handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(photo_routes())
        .merge(property_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Photo file routes, including the nested alias under `/properties`.
fn photo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/photos/{property_id}/{filename}",
            get(handlers::photo::show_photo),
        )
        .route(
            "/properties/{property_id}/photos/{filename}",
            get(handlers::photo::show_photo),
        )
}

/// Property catalog routes.
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list_properties))
        .route(
            "/properties/{property_id}",
            get(handlers::property::get_property),
        )
}

/// Liveness and readiness.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/up", get(handlers::health::health))
        .route("/up/detailed", get(handlers::health::health_detailed))
}
