//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartItem;
use crate::catalog::Catalog;

/// Merges `incoming` into `cart_items` and returns the line's new quantity.
///
/// If an item with the same `(product_id, unit)` already exists its quantity
/// is increased in place; otherwise `incoming` is appended.
pub fn merge_cart_item(cart_items: &mut Vec<CartItem>, incoming: CartItem) -> f64 {
    if let Some(existing) = cart_items.iter_mut().find(|i| i.same_line(&incoming)) {
        existing.quantity += incoming.quantity;
        existing.quantity
    } else {
        let quantity = incoming.quantity;
        cart_items.push(incoming);
        quantity
    }
}

/// Drops every item for `product_id`, whatever its unit.
pub fn remove_product(cart_items: &mut Vec<CartItem>, product_id: i64) {
    cart_items.retain(|i| i.product_id != product_id);
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2 kg Tomato, 1 dozen Banana (Dozen)"`.
pub fn format_item_summary(items: &[CartItem], catalog: &Catalog) -> String {
    items
        .iter()
        .map(|i| {
            let name = catalog
                .get_product_by_id(i.product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("#{}", i.product_id));
            format!("{} {} {}", i.quantity, i.unit, name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
