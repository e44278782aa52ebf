//! REST handlers for the task CRUD endpoints.
//!
//! Each handler checks one connection out of the pool at entry; the
//! pooled connection drops back on every exit path, error or not. The
//! handlers translate between HTTP and [`TaskService`] — no business
//! logic lives here.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use taskd_store::{PooledConnection, Task, TaskDraft, TaskError, TaskFilter, TaskService};

use crate::error::ApiError;
use crate::server::AppState;

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Fixed acknowledgment message.
    pub message: String,
}

/// Check a connection out of the pool for the current request.
fn checkout(state: &AppState) -> Result<PooledConnection, ApiError> {
    state.pool.get().map_err(|e| ApiError::from(TaskError::from(e)))
}

/// POST /tasks/ — create a task; the store assigns the id.
pub async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiError> {
    let conn = checkout(&state)?;
    let task = TaskService::create(&conn, &draft)?;
    Ok(Json(task))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let conn = checkout(&state)?;
    let task = TaskService::get(&conn, id)?;
    Ok(Json(task))
}

/// PUT /tasks/{id} — full-replace update of every non-id field.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiError> {
    let conn = checkout(&state)?;
    let task = TaskService::update(&conn, id, &draft)?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = checkout(&state)?;
    TaskService::delete(&conn, id)?;
    Ok(Json(DeleteResponse {
        message: "Task successfully deleted".to_string(),
    }))
}

/// GET /tasks/?completed={bool}
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let conn = checkout(&state)?;
    let tasks = TaskService::list(&conn, &filter)?;
    Ok(Json(tasks))
}
