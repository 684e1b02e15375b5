//! MCP (Model Context Protocol) route handlers
//!
//! JSON-RPC dispatch for the grocery tools. `handle_tool_call` is public so
//! the tools can be exercised without going through HTTP.

use super::{helpers::*, models::*};
use crate::cart::{helpers::format_item_summary, models::*, state::*};
use crate::catalog::models::ProductFilter;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "Invalid JSON-RPC body");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(method = method_name, "Unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn product_id_schema() -> Value {
    json!({ "type": "integer", "description": "Catalog product id" })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    let no_args = json!({ "type": "object", "properties": {}, "additionalProperties": false });

    json!({
        "tools": [
            {
                "name": LIST_CATEGORIES_TOOL,
                "title": "List categories",
                "description": "Lists every grocery category.",
                "inputSchema": no_args
            },
            {
                "name": LIST_PRODUCTS_TOOL,
                "title": "List products",
                "description": "Lists products, optionally filtered by category, maximum price, and a name/brand search.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category_id": { "type": "integer" },
                        "max_price": { "type": "number" },
                        "search": { "type": "string" },
                        "available_only": { "type": "boolean", "default": true }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": GET_CART_TOOL,
                "title": "Show cart",
                "description": "Returns the current cart contents.",
                "inputSchema": no_args
            },
            {
                "name": ADD_TO_CART_TOOL,
                "title": "Add to cart",
                "description": "Adds a product to the cart, merging with an existing line of the same unit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "product_id": product_id_schema(),
                        "quantity": { "type": "number", "default": 1 },
                        "unit": { "type": "string", "default": "pcs" }
                    },
                    "required": ["product_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_FROM_CART_TOOL,
                "title": "Remove from cart",
                "description": "Removes every cart line for a product.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "product_id": product_id_schema() },
                    "required": ["product_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": CLEAR_CART_TOOL,
                "title": "Clear cart",
                "description": "Empties the cart.",
                "inputSchema": no_args
            }
        ]
    })
}

/// Deserializes tool arguments; a missing `arguments` object counts as `{}`.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        LIST_CATEGORIES_TOOL => Ok(handle_list_categories_tool(state)),
        LIST_PRODUCTS_TOOL => handle_list_products_tool(state, args),
        GET_CART_TOOL => Ok(cart_result(state, state.get_cart())),
        ADD_TO_CART_TOOL => handle_add_to_cart_tool(state, args),
        REMOVE_FROM_CART_TOOL => handle_remove_from_cart_tool(state, args),
        CLEAR_CART_TOOL => Ok(cart_result(state, state.clear_cart())),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

fn handle_list_categories_tool(state: &AppState) -> Value {
    let categories = state.catalog.list_categories();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    tool_result(
        format!("{} categories: {}", categories.len(), names.join(", ")),
        json!({ "categories": categories }),
    )
}

fn handle_list_products_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let filter: ProductFilter = parse_args(args)?;
    let products = state.catalog.list_products(&filter);

    Ok(tool_result(
        format!("Found {} product(s).", products.len()),
        json!({ "products": products }),
    ))
}

/// Handles the add_to_cart tool functionality
fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let item: CartItem = parse_args(args)?;
    let items = state.add_to_cart(item).map_err(|e| e.to_string())?;

    Ok(cart_result(state, items))
}

fn handle_remove_from_cart_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let input: RemoveFromCartInput = parse_args(args)?;
    let items = state.remove_from_cart(input.product_id);

    Ok(cart_result(state, items))
}

/// Tool result for every cart operation: a summary line plus the items.
fn cart_result(state: &AppState, items: Vec<CartItem>) -> Value {
    let text = if items.is_empty() {
        "Cart is empty.".to_string()
    } else {
        format!(
            "Cart has {} item(s): {}",
            items.len(),
            format_item_summary(&items, &state.catalog)
        )
    };

    tool_result(text, json!({ "items": items }))
}
