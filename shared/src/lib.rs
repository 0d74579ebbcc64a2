//! Shared types for the label designer
//!
//! Data contracts used by both the print core and the HTTP server:
//! the label type catalog, label payloads, queue descriptors, persisted
//! templates, and the unified error / response types.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
