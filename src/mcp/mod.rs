//! MCP surface for the FoxESS bridge.
//!
//! Built on `rmcp`'s `ServerHandler`. Tool declarations live in `tools` and
//! are registered via `#[tool_router]`; each one shapes its arguments into a
//! single dispatcher call and returns the ApiResult mapping as JSON text
//! content. Remote failures ride inside that mapping, never as MCP errors.

pub mod server;
pub mod tools;

pub use server::FoxEssMcpServer;
