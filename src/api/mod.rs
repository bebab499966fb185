//! FoxESS Cloud OpenAPI access: request signing and dispatch.

pub mod client;
pub mod signature;

pub use client::{FoxEssClient, Method};
pub use signature::generate_signature;
