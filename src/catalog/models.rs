//! Catalog Domain Models
//!
//! Categories, products, and the product listing filter.

use serde::{de, Deserialize, Deserializer, Serialize};

// =============================================================================
// Defaults
// =============================================================================

/// Default unit for products and cart items
pub fn default_unit() -> String {
    "pcs".to_string()
}

fn default_true() -> bool {
    true
}

/// Accepts a JSON bool or a query-string flag: `true/1/yes/on` and
/// `false/0/no/off`, case-insensitively.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(de::Error::invalid_value(
                de::Unexpected::Str(&text),
                &"a boolean flag",
            )),
        },
    }
}

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A product that can be ordered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Owning category; not checked against the category list
    pub category_id: i64,
    pub price: f64,

    /// e.g. "kg", "g", "L", "pcs"
    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_true")]
    pub is_available: bool,

    pub brand: Option<String>,
    pub description: Option<String>,
}

/// Filter applied by `Catalog::list_products`.
///
/// Also used directly as the query string of `GET /products`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,

    /// Drop products with `is_available == false` (defaults to true)
    #[serde(default = "default_true", deserialize_with = "deserialize_flag")]
    pub available_only: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category_id: None,
            max_price: None,
            search: None,
            available_only: true,
        }
    }
}

impl ProductFilter {
    /// Whether `product` passes every predicate of this filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = self.category_id {
            if product.category_id != category_id {
                return false;
            }
        }

        // NaN admits nothing
        if let Some(max_price) = self.max_price {
            if max_price.is_nan() || product.price > max_price {
                return false;
            }
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_brand = product
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(&needle));
            if !in_name && !in_brand {
                return false;
            }
        }

        !self.available_only || product.is_available
    }
}
