//! Domain layer for the Emma backend.
//!
//! This crate contains:
//! - Domain models for people, events, venues, transactions and the rest of
//!   the membership data
//! - Request/response DTOs with declarative validation schemas
//! - Derived-status functions (event publication status)

pub mod models;
