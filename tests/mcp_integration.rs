//! Integration tests for the MCP (Model Context Protocol) server
//!
//! These tests verify the JSON-RPC surface including:
//! - Server initialization and handshake
//! - Tool discovery
//! - Tool execution (catalog reads, cart mutations)
//! - Error handling

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use grocery_cart_rust::cart::AppState;
use grocery_cart_rust::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::default()))
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Calls a tool and returns the JSON-RPC response body
async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/event-stream");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "grocery-cart-rust");
    assert!(result["capabilities"]["tools"]["listChanged"]
        .as_bool()
        .unwrap());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "list_categories",
            "list_products",
            "get_cart",
            "add_to_cart",
            "remove_from_cart",
            "clear_cart"
        ]
    );

    let add_to_cart = &tools[3];
    assert_eq!(add_to_cart["title"], "Add to cart");
    assert!(add_to_cart["inputSchema"]["properties"]["product_id"].is_object());
    assert_eq!(add_to_cart["inputSchema"]["required"], json!(["product_id"]));
}

#[tokio::test]
async fn test_mcp_list_categories() {
    let app = create_test_app();

    let body = call_tool(&app, "list_categories", json!({}), 3).await;

    let categories = body["result"]["structuredContent"]["categories"]
        .as_array()
        .unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[1]["name"], "Fruits");
    assert!(body["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .starts_with("5 categories"));
}

#[tokio::test]
async fn test_mcp_list_products_with_filters() {
    let app = create_test_app();

    let body = call_tool(&app, "list_products", json!({ "category_id": 2 }), 4).await;
    let ids: Vec<i64> = body["result"]["structuredContent"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![201, 202, 203, 204]);

    let body = call_tool(&app, "list_products", json!({ "search": "nescafe" }), 5).await;
    let products = body["result"]["structuredContent"]["products"]
        .as_array()
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 504);
    assert_eq!(body["result"]["content"][0]["text"], "Found 1 product(s).");
}

#[tokio::test]
async fn test_mcp_list_products_without_arguments() {
    let app = create_test_app();

    let params = json!({ "name": "list_products" });
    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 6).await;

    assert_eq!(status, StatusCode::OK);
    let products = body["result"]["structuredContent"]["products"]
        .as_array()
        .unwrap();
    assert_eq!(products.len(), 20);
}

#[tokio::test]
async fn test_mcp_add_to_cart_aggregation() {
    let app = create_test_app();

    let body = call_tool(
        &app,
        "add_to_cart",
        json!({ "product_id": 101, "quantity": 2, "unit": "kg" }),
        7,
    )
    .await;
    let items = body["result"]["structuredContent"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 2.0);

    let body = call_tool(
        &app,
        "add_to_cart",
        json!({ "product_id": 101, "quantity": 1, "unit": "kg" }),
        8,
    )
    .await;

    let items = body["result"]["structuredContent"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], 101);
    assert_eq!(items[0]["quantity"], 3.0);
    assert_eq!(items[0]["unit"], "kg");

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(text, "Cart has 1 item(s): 3 kg Tomato");
}

#[tokio::test]
async fn test_mcp_add_unknown_product() {
    let app = create_test_app();

    let body = call_tool(&app, "add_to_cart", json!({ "product_id": 999 }), 9).await;

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert_eq!(error["message"], "Product not found");

    let body = call_tool(&app, "get_cart", json!({}), 10).await;
    assert_eq!(body["result"]["structuredContent"]["items"], json!([]));
    assert_eq!(body["result"]["content"][0]["text"], "Cart is empty.");
}

#[tokio::test]
async fn test_mcp_remove_and_clear() {
    let app = create_test_app();

    call_tool(&app, "add_to_cart", json!({ "product_id": 202, "unit": "kg" }), 11).await;
    call_tool(&app, "add_to_cart", json!({ "product_id": 302, "unit": "g" }), 12).await;

    let body = call_tool(&app, "remove_from_cart", json!({ "product_id": 202 }), 13).await;
    let items = body["result"]["structuredContent"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], 302);

    let body = call_tool(&app, "clear_cart", json!({}), 14).await;
    assert_eq!(body["result"]["structuredContent"]["items"], json!([]));
    assert_eq!(body["result"]["content"][0]["text"], "Cart is empty.");
}

#[tokio::test]
async fn test_mcp_and_rest_share_the_cart() {
    let app = create_test_app();

    call_tool(&app, "add_to_cart", json!({ "product_id": 401, "unit": "pack" }), 15).await;

    let request = Request::builder()
        .method("GET")
        .uri("/cart")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body, json!([{ "product_id": 401, "quantity": 1.0, "unit": "pack" }]));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 16).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 16);

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let body = call_tool(&app, "unknown_tool", json!({}), 17).await;

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_arguments() {
    let app = create_test_app();

    let body = call_tool(&app, "add_to_cart", json!({ "invalid_field": "value" }), 18).await;

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("Invalid arguments"));
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 19).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 19);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "notifications/initialized", None, 20).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app();

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
