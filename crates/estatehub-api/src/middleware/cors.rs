//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use estatehub_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// The API is read-only, so only `GET`, `HEAD` and `OPTIONS` are allowed.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new().allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}
