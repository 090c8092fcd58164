//! Data models
//!
//! Shared between the inventory library and the HTTP host.

pub mod product;

// Re-exports
pub use product::*;
