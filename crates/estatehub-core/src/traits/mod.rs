//! Core traits defined in `estatehub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
