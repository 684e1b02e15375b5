//! Grocery Cart Library
//!
//! A single-user grocery ordering backend: a fixed catalog of categories and
//! products plus one in-memory shopping cart, served over REST and MCP.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
