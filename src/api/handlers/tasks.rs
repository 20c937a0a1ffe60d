//! Task API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::state::MemoryStore;
use crate::model::{NewTask, Task};

/// Path ids must be integers; anything else is an unknown route
fn parse_id(raw: &str) -> Result<i64, StatusCode> {
    raw.parse::<i64>().map_err(|_| StatusCode::NOT_FOUND)
}

/// GET /tasks
pub async fn list_tasks(State(store): State<Arc<MemoryStore>>) -> Json<Vec<Task>> {
    Json(store.list())
}

/// POST /tasks
pub async fn create_task(
    State(store): State<Arc<MemoryStore>>,
    Json(body): Json<NewTask>,
) -> (StatusCode, Json<Task>) {
    let task = store.create(body);
    tracing::debug!(id = %task.id, "task created");
    (StatusCode::CREATED, Json(task))
}

/// PUT /tasks/{id}
///
/// Extra fields in the body (such as `id`) are ignored; the path id wins.
pub async fn update_task(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<String>,
    Json(body): Json<NewTask>,
) -> Result<Json<Task>, StatusCode> {
    let id = parse_id(&id)?;
    let task = store.update(id, body);
    tracing::debug!(id, completed = task.completed, "task updated");
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    let Ok(id) = parse_id(&id) else {
        return StatusCode::NOT_FOUND;
    };
    let removed = store.delete(id);
    tracing::debug!(id, removed, remaining = store.len(), "task deleted");
    StatusCode::NO_CONTENT
}
