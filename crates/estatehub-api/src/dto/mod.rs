//! Data transfer objects for API responses.

pub mod response;
