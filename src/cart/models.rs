//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::models::default_unit;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> f64 {
    1.0
}

/// Represents a line item in the shopping cart.
///
/// Items are unique in a cart by `(product_id, unit)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Catalog product this line refers to
    pub product_id: i64,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    /// Unit of the quantity (defaults to "pcs"); not checked against the product
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl CartItem {
    pub fn new(product_id: i64, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            product_id,
            quantity,
            unit: unit.into(),
        }
    }

    /// Whether `other` shares this item's merge key
    pub fn same_line(&self, other: &CartItem) -> bool {
        self.product_id == other.product_id && self.unit == other.unit
    }
}

/// Input for removing a product from the cart
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartInput {
    pub product_id: i64,
}
