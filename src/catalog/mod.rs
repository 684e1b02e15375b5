//! Catalog Domain Module
//!
//! - Domain models (Category, Product, ProductFilter)
//! - Seed data
//! - The read-only catalog store
//! - REST API handlers

pub mod data;
pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use models::{Category, Product, ProductFilter};
pub use store::Catalog;
