//! Shared types for the Estoque workspace
//!
//! Domain models and the unified error / response types used by the
//! inventory server.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Product, ProductCode, ProductMap};
pub use serde::{Deserialize, Serialize};
