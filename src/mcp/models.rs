//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool listing every category
pub const LIST_CATEGORIES_TOOL: &str = "list_categories";
/// Tool listing products with optional filters
pub const LIST_PRODUCTS_TOOL: &str = "list_products";
/// Tool returning the cart contents
pub const GET_CART_TOOL: &str = "get_cart";
/// Tool adding one line item to the cart
pub const ADD_TO_CART_TOOL: &str = "add_to_cart";
/// Tool removing a product from the cart
pub const REMOVE_FROM_CART_TOOL: &str = "remove_from_cart";
/// Tool emptying the cart
pub const CLEAR_CART_TOOL: &str = "clear_cart";

/// Server identifier
pub const SERVER_NAME: &str = "grocery-cart-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
