//! Catalog Store
//!
//! Read-only access to the categories and products fixed at startup.

use super::data::{seed_categories, seed_products};
use super::models::{Category, Product, ProductFilter};

/// Immutable catalog of categories and products, in definition order
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// The built-in grocery catalog
    pub fn seeded() -> Self {
        Self::new(seed_categories(), seed_products())
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products of one category, including unavailable ones
    pub fn get_products_by_category(&self, category_id: i64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    /// Products passing every predicate of `filter`, in definition order.
    pub fn list_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        let candidates = match filter.category_id {
            Some(category_id) => self.get_products_by_category(category_id),
            None => self.products.iter().collect(),
        };

        candidates
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    pub fn get_product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
