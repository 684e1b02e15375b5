//! Shopping Cart State Management
//!
//! This module owns the single cart and the application state that pairs it
//! with the catalog.

use super::helpers::{format_item_summary, merge_cart_item, remove_product};
use super::models::CartItem;
use crate::catalog::Catalog;
use crate::error::DomainError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// =============================================================================
// Cart Store
// =============================================================================

/// Ordered collection of line items, unique by `(product_id, unit)`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, in insertion order
    pub fn get(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds `item`, merging it into an existing line with the same
    /// `(product_id, unit)`.
    ///
    /// Fails with `ProductNotFound` (leaving the cart untouched) when the
    /// product is not in `catalog`.
    pub fn add(&mut self, catalog: &Catalog, item: CartItem) -> Result<&[CartItem], DomainError> {
        if catalog.get_product_by_id(item.product_id).is_none() {
            return Err(DomainError::ProductNotFound(item.product_id));
        }

        let product_id = item.product_id;
        let added = item.quantity;
        let unit = item.unit.clone();
        let line_quantity = merge_cart_item(&mut self.items, item);
        tracing::info!(
            product_id,
            added,
            unit = %unit,
            line_quantity,
            "Added to cart"
        );

        Ok(&self.items)
    }

    /// Removes every line for `product_id` regardless of unit. No-op when absent.
    pub fn remove(&mut self, product_id: i64) -> &[CartItem] {
        let before = self.items.len();
        remove_product(&mut self.items, product_id);
        tracing::info!(
            product_id,
            removed = before - self.items.len(),
            "Removed from cart"
        );

        &self.items
    }

    pub fn clear(&mut self) -> &[CartItem] {
        self.items.clear();
        tracing::info!("Cart cleared");

        &self.items
    }

    /// One-line summary such as `"2 kg Tomato, 1 dozen Banana (Dozen)"`
    pub fn summary(&self, catalog: &Catalog) -> String {
        format_item_summary(&self.items, catalog)
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the immutable catalog and the single user's cart.
///
/// All cart access goes through one lock, so concurrent requests are
/// serialized per operation.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    cart: Mutex<Cart>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl AppState {
    /// Creates a new AppState with an empty cart over `catalog`
    pub fn new(catalog: Catalog) -> Self {
        tracing::debug!(
            categories = catalog.list_categories().len(),
            "Catalog loaded"
        );

        Self {
            catalog,
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Locks the cart for the duration of one operation.
    ///
    /// Cart operations never leave the items half-updated, so a poisoned lock
    /// is safe to recover.
    pub fn cart(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_cart(&self) -> Vec<CartItem> {
        self.cart().get().to_vec()
    }

    pub fn add_to_cart(&self, item: CartItem) -> Result<Vec<CartItem>, DomainError> {
        let mut cart = self.cart();
        let items = cart.add(&self.catalog, item)?.to_vec();
        Ok(items)
    }

    pub fn remove_from_cart(&self, product_id: i64) -> Vec<CartItem> {
        self.cart().remove(product_id).to_vec()
    }

    pub fn clear_cart(&self) -> Vec<CartItem> {
        let mut cart = self.cart();
        if !cart.get().is_empty() {
            tracing::debug!(items = %cart.summary(&self.catalog), "Clearing cart");
        }
        cart.clear().to_vec()
    }
}
