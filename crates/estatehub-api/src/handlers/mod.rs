//! HTTP request handlers.

pub mod health;
pub mod photo;
pub mod property;
