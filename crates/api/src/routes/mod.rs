//! HTTP route handlers, one module per resource.

pub mod areas;
pub mod communities;
pub mod events;
pub mod health;
pub mod igroups;
pub mod people;
pub mod prospects;
pub mod public_config;
pub mod registrants;
pub mod transactions;
pub mod users;
pub mod venues;
pub mod warriors;
