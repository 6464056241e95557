//! Route handlers for the task API.
//!
//! Each handler is a thin translation of a `TaskStore` result into a status
//! code and JSON body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use taskdash_core::api::{CreateTaskRequest, HealthResponse, MessageResponse, UpdateTaskRequest};
use taskdash_core::Task;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::server::AppState;
use crate::validation::{draft_from_request, patch_from_request};

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .store
        .list_tasks()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch tasks"))?;

    debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// `GET /tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    state
        .store
        .get_task(&task_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch task"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /tasks`
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(request) = payload?;
    let draft = draft_from_request(request)?;

    let task = state
        .store
        .create_task(draft)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create task"))?;

    info!(task_id = %task.id, title = %task.title, "Created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(request) = payload?;
    let patch = patch_from_request(request)?;

    let task = state
        .store
        .update_task(&task_id, &patch)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update task"))?
        .ok_or(ApiError::NotFound)?;

    info!(task_id = %task.id, status = %task.status, "Updated task");
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .store
        .delete_task(&task_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete task"))?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!(task_id = %task_id, "Deleted task");
    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        storage: state.store.storage_mode(),
        timestamp: Utc::now(),
    })
}
