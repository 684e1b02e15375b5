//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartItem, inputs)
//! - Business logic helpers (merging, removal, formatting)
//! - Cart store and application state
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::CartItem;
pub use state::{AppState, Cart, SharedState};
