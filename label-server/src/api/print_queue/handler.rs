//! Print Queue API Handlers
//!
//! The queue lock is only held for synchronous store access; composition
//! runs on a snapshot after the lock is released.

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use label_printer::{HtmlPrintBuilder, PageGeometry, QueueSummary, RenderedFragment, compose as compose_queue};
use shared::models::{LabelDescriptor, LabelPatch, LabelPayload};

use crate::core::ServerState;
use crate::db::repository::template;
use crate::utils::validation::{parse_label_type, require, require_data, validate_quantity};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// Queue entry as listed in the sidebar
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: u64,
    pub display_name: &'static str,
    pub preview: String,
    pub label: LabelPayload,
    pub added_at: i64,
}

impl From<&LabelDescriptor> for QueueEntry {
    fn from(d: &LabelDescriptor) -> Self {
        Self {
            id: d.id,
            display_name: d.label_type().display_name(),
            preview: d.label.preview(),
            label: d.label.clone(),
            added_at: d.added_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueListing {
    pub entries: Vec<QueueEntry>,
    pub summary: QueueSummary,
    /// e.g. "2 label type(s) in queue (5 total labels)"
    pub summary_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedQueue {
    pub fragments: Vec<RenderedFragment>,
    pub summary: QueueSummary,
}

/// Body of POST /api/print-queue (`{ "type": "bin", "data": { ... } }`)
#[derive(Debug, Deserialize)]
pub struct QueueAddRequest {
    #[serde(rename = "type")]
    pub label_type: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct QueueAddResponse {
    pub id: u64,
}

/// GET /api/print-queue - List queued labels
pub async fn list(State(state): State<ServerState>) -> Json<QueueListing> {
    let queue = state.queue.lock();
    let summary = queue.summary();
    Json(QueueListing {
        entries: queue.entries().iter().map(QueueEntry::from).collect(),
        summary,
        summary_text: summary.to_string(),
    })
}

/// POST /api/print-queue - Queue a label
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<QueueAddRequest>,
) -> AppResult<Json<QueueAddResponse>> {
    let raw_type = require(payload.label_type, "type")?;
    let data = require_data(payload.data, "data")?;
    let label_type = parse_label_type(&raw_type)?;

    let label = LabelPayload::from_template_data(label_type, data).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid {label_type} label data: {e}"))
    })?;
    enqueue(&state, label)
}

/// POST /api/print-queue/from-template/:id - Queue a saved template
pub async fn add_from_template(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<QueueAddResponse>> {
    let saved = template::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::template_not_found(id))?;

    let label = LabelPayload::from_template_data(saved.label_type, saved.data).map_err(|e| {
        AppError::new(ErrorCode::TemplateDataMismatch)
            .with_detail("id", id)
            .with_detail("reason", e.to_string())
    })?;
    enqueue(&state, label)
}

fn enqueue(state: &ServerState, label: LabelPayload) -> AppResult<Json<QueueAddResponse>> {
    validate_quantity(label.quantity(), state.config.max_label_quantity)?;
    let id = state.queue.lock().add(label);
    Ok(Json(QueueAddResponse { id }))
}

/// PATCH /api/print-queue/:id - Merge fields into a queued label
///
/// Returns `false` if the entry no longer exists.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(patch): Json<LabelPatch>,
) -> AppResult<Json<bool>> {
    if let Some(quantity) = patch.quantity {
        validate_quantity(quantity, state.config.max_label_quantity)?;
    }
    Ok(Json(state.queue.lock().update(id, &patch)))
}

/// DELETE /api/print-queue/:id - Remove a queued label
///
/// Returns `false` if the entry no longer exists.
pub async fn remove(State(state): State<ServerState>, Path(id): Path<u64>) -> Json<bool> {
    Json(state.queue.lock().remove(id))
}

/// DELETE /api/print-queue - Clear the queue
pub async fn clear(State(state): State<ServerState>) -> ApiResponse<()> {
    state.queue.lock().clear();
    ApiResponse::message("Queue cleared")
}

/// GET /api/print-queue/compose - Break-annotated fragment stream
pub async fn compose(State(state): State<ServerState>) -> AppResult<Json<ComposedQueue>> {
    let snapshot = state.queue.lock().snapshot();
    let fragments = compose_queue(&snapshot)?;
    Ok(Json(ComposedQueue {
        fragments,
        summary: QueueSummary::of(&snapshot),
    }))
}

/// GET /api/print-queue/print - Print-ready HTML document
pub async fn print(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let snapshot = state.queue.lock().snapshot();
    let fragments = compose_queue(&snapshot)?;

    let mut builder = HtmlPrintBuilder::new(PageGeometry::LETTER);
    builder.fragments(&fragments);
    Ok(Html(builder.build()))
}
