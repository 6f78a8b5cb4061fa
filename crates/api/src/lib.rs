//! HTTP layer for the Emma backend: configuration, router assembly,
//! middleware and the resource route handlers.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
