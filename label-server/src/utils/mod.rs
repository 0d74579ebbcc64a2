//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from shared::error)
//! - logging setup
//! - input validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
