//! Label Template Repository

use super::{RepoError, RepoResult};
use serde_json::Value;
use shared::models::{LabelType, Template};
use sqlx::SqlitePool;

/// Raw `label_templates` row; `data` is JSON text
#[derive(Debug, sqlx::FromRow)]
struct TemplateRow {
    id: i64,
    #[sqlx(rename = "type")]
    label_type: LabelType,
    name: String,
    data: String,
    created_at: i64,
}

impl TryFrom<TemplateRow> for Template {
    type Error = RepoError;

    fn try_from(row: TemplateRow) -> Result<Self, Self::Error> {
        Ok(Template {
            id: row.id,
            label_type: row.label_type,
            name: row.name,
            data: serde_json::from_str(&row.data)?,
            created_at: row.created_at,
        })
    }
}

/// Newest first, optionally restricted to one label type
pub async fn list(pool: &SqlitePool, label_type: Option<LabelType>) -> RepoResult<Vec<Template>> {
    let rows = match label_type {
        Some(t) => {
            sqlx::query_as::<_, TemplateRow>(
                "SELECT id, type, name, data, created_at FROM label_templates WHERE type = ? ORDER BY created_at DESC, id DESC",
            )
            .bind(t.as_str())
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, TemplateRow>(
                "SELECT id, type, name, data, created_at FROM label_templates ORDER BY created_at DESC, id DESC",
            )
            .fetch_all(pool)
            .await?
        }
    };

    rows.into_iter().map(Template::try_from).collect()
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<Template>> {
    let row = sqlx::query_as::<_, TemplateRow>(
        "SELECT id, type, name, data, created_at FROM label_templates WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Template::try_from).transpose()
}

pub async fn create(
    pool: &SqlitePool,
    label_type: LabelType,
    name: &str,
    data: &Value,
) -> RepoResult<Template> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO label_templates (type, name, data, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(label_type.as_str())
    .bind(name)
    .bind(serde_json::to_string(data)?)
    .bind(now)
    .fetch_one(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create label template".into()))
}

/// Replace name and data; the type never changes
pub async fn update(pool: &SqlitePool, id: i64, name: &str, data: &Value) -> RepoResult<Template> {
    let rows = sqlx::query("UPDATE label_templates SET name = ?1, data = ?2 WHERE id = ?3")
        .bind(name)
        .bind(serde_json::to_string(data)?)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Template {id} not found")));
    }

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Template {id} not found")))
}

/// Hard delete. Returns `false` if no such template.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM label_templates WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
