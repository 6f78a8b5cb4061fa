//! Persistence layer for the Emma backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations, one per resource

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
