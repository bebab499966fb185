//! FoxESS Cloud MCP bridge.
//!
//! Exposes the FoxESS Cloud OpenAPI (a solar inverter / battery management
//! service) as MCP tools. Each tool shapes its typed arguments into one
//! signed HTTP request and returns the remote JSON response, or a uniform
//! error mapping, to the caller.

pub mod api;
pub mod config;
pub mod error;
pub mod mcp;

pub use error::{FoxEssError, Result};
