//! Health check route
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/health | GET | Liveness check |
//!
//! ```json
//! { "status": "ok", "timestamp": "2024-01-22T08:32:15.123+00:00" }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// RFC 3339 server time
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
