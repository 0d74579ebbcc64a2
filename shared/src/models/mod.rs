//! Data models
//!
//! Shared between label-server, the print core and the browser client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::Type))]`.

pub mod label;
pub mod template;

// Re-exports
pub use label::*;
pub use template::*;
