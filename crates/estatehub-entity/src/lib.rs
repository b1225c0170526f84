//! # estatehub-entity
//!
//! Domain entity models for EstateHub. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! derive `sqlx::FromRow`; creation payloads derive `validator::Validate`.
//!
//! The cover selector and the position assigner live here as pure
//! functions over photo snapshots so that every store and service shares
//! exactly one definition of both rules.

pub mod photo;
pub mod property;
