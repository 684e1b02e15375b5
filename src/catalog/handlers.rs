//! REST API handlers for catalog reads

use super::models::{Category, Product, ProductFilter};
use crate::cart::state::SharedState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/products", get(list_products))
}

/// Endpoint: GET /categories
async fn list_categories(State(state): State<SharedState>) -> Json<Vec<Category>> {
    Json(state.catalog.list_categories().to_vec())
}

/// Endpoint: GET /products
/// Query: `category_id`, `max_price`, `search`, `available_only` (default true)
async fn list_products(
    State(state): State<SharedState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let products = state
        .catalog
        .list_products(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(products)
}
