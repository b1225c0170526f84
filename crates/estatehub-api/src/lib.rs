//! # estatehub-api
//!
//! HTTP API layer for EstateHub built on Axum.
//!
//! Serves photo files under `/photos/{property_id}/{filename}`, exposes the
//! property catalog as JSON, and reports liveness under `/up`. Also holds the
//! error-to-HTTP mapping, the middleware stack, and server bootstrap.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
