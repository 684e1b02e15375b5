//! Model Context Protocol (MCP) Module
//!
//! Exposes the catalog and cart operations as MCP tools over JSON-RPC 2.0:
//! - Protocol models (JsonRpcRequest, constants)
//! - RPC helpers (success/error envelopes, tool results)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
