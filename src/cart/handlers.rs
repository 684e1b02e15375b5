//! REST API handlers for shopping cart operations
//!
//! Every endpoint responds with the full cart after the operation.

use super::{models::*, state::SharedState};
use crate::error::AppError;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/clear", post(clear_cart))
}

/// Endpoint: GET /cart
async fn get_cart(State(state): State<SharedState>) -> Json<Vec<CartItem>> {
    Json(state.get_cart())
}

/// Endpoint: POST /cart/add
/// Merges the item into the cart; 404 when the product is unknown.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(item): Json<CartItem>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let items = state.add_to_cart(item)?;
    Ok(Json(items))
}

/// Endpoint: POST /cart/remove
async fn remove_from_cart(
    State(state): State<SharedState>,
    Json(payload): Json<RemoveFromCartInput>,
) -> Json<Vec<CartItem>> {
    Json(state.remove_from_cart(payload.product_id))
}

/// Endpoint: POST /cart/clear
async fn clear_cart(State(state): State<SharedState>) -> Json<Vec<CartItem>> {
    Json(state.clear_cart())
}
