//! API routes
//!
//! - [`health`] - liveness check
//! - [`templates`] - saved label templates
//! - [`print_queue`] - session print queue and print output

pub mod health;
pub mod print_queue;
pub mod templates;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
