//! Shared utilities for the Emma backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Declarative validation helpers for request DTOs
//! - Search-term sanitization for free-text queries

pub mod search;
pub mod validation;
