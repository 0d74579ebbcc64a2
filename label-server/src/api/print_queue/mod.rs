//! Print Queue API Module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/print-queue | GET | Entries with previews and totals |
//! | /api/print-queue | POST | Queue a label |
//! | /api/print-queue | DELETE | Clear the queue |
//! | /api/print-queue/{id} | PATCH | Merge a partial payload |
//! | /api/print-queue/{id} | DELETE | Remove one entry |
//! | /api/print-queue/compose | GET | Break-annotated fragment stream |
//! | /api/print-queue/print | GET | Print-ready HTML document |
//! | /api/print-queue/from-template/{id} | POST | Queue a saved template |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

/// Print queue router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/print-queue", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::add)
                .delete(handler::clear),
        )
        .route("/compose", get(handler::compose))
        .route("/print", get(handler::print))
        .route("/from-template/{id}", post(handler::add_from_template))
        .route("/{id}", patch(handler::update).delete(handler::remove))
}
