//! Property management.

pub mod service;

pub use service::PropertyService;
