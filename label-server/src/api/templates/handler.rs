//! Label Template API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::repository::template;
use crate::utils::validation::{
    MAX_NAME_LEN, parse_label_type, require, require_data, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult};
use shared::models::{LabelType, Template, TemplateCreate, TemplateQuery, TemplateUpdate};

/// GET /api/labels/templates?type= - List templates, newest first
///
/// A filter type outside the catalog matches nothing.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TemplateQuery>,
) -> AppResult<Json<Vec<Template>>> {
    let label_type = match query.label_type.as_deref().filter(|t| !t.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<LabelType>() {
            Ok(t) => Some(t),
            Err(_) => return Ok(Json(Vec::new())),
        },
    };

    let templates = template::list(&state.pool, label_type).await?;
    Ok(Json(templates))
}

/// GET /api/labels/templates/:id - Get a template by ID
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Template>> {
    let template = template::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::template_not_found(id))?;
    Ok(Json(template))
}

/// POST /api/labels/templates - Save a new template
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TemplateCreate>,
) -> AppResult<Json<Template>> {
    let raw_type = require(payload.label_type, "type")?;
    let name = require(payload.name, "name")?;
    let data = require_data(payload.data, "data")?;

    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    let label_type = parse_label_type(&raw_type)?;

    let template = template::create(&state.pool, label_type, &name, &data).await?;
    tracing::info!(template_id = template.id, label_type = %label_type, "Label template created");
    Ok(Json(template))
}

/// PUT /api/labels/templates/:id - Replace a template's name and data
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TemplateUpdate>,
) -> AppResult<Json<Template>> {
    let name = require(payload.name, "name")?;
    let data = require_data(payload.data, "data")?;
    validate_required_text(&name, "name", MAX_NAME_LEN)?;

    if template::get(&state.pool, id).await?.is_none() {
        return Err(AppError::template_not_found(id));
    }

    let template = template::update(&state.pool, id, &name, &data).await?;
    tracing::info!(template_id = id, "Label template updated");
    Ok(Json(template))
}

/// DELETE /api/labels/templates/:id - Delete a template (hard delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    if !template::delete(&state.pool, id).await? {
        return Err(AppError::template_not_found(id));
    }

    tracing::info!(template_id = id, "Label template deleted");
    Ok(ApiResponse::message("Template deleted successfully"))
}
