//! Router for the tasks API (the to-do list the chat bot drives)

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};

use super::public;
use crate::api::state::AppState;
use crate::tasks::TaskStore;

type SharedState = Arc<RwLock<AppState>>;

/// List every task in insertion order
async fn task_list(
    State(state): State<SharedState>,
) -> Result<Json<public::TaskListResponse>, crate::api::public::ApiError> {
    let shared_state = state
        .read()
        .map_err(|_| anyhow!("App state lock poisoned"))?;

    Ok(Json(public::TaskListResponse {
        tasks: shared_state.tasks.tasks(),
    }))
}

/// Add a task directly, bypassing the chat bot
async fn task_add(
    State(state): State<SharedState>,
    Json(payload): Json<public::AddTaskRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let task = payload.task.trim();
    if task.is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, "Task must not be empty").into_response());
    }

    let mut shared_state = state
        .write()
        .map_err(|_| anyhow!("App state lock poisoned"))?;
    shared_state.tasks.add_task(task);

    Ok(Json(public::TaskListResponse {
        tasks: shared_state.tasks.tasks(),
    })
    .into_response())
}

/// Remove a task by its exact text
async fn task_delete(
    State(state): State<SharedState>,
    Path(task): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let mut shared_state = state
        .write()
        .map_err(|_| anyhow!("App state lock poisoned"))?;

    if !shared_state.tasks.remove(&task) {
        return Ok((StatusCode::NOT_FOUND, format!("Task {} not found", task)).into_response());
    }

    Ok(Json(public::TaskListResponse {
        tasks: shared_state.tasks.tasks(),
    })
    .into_response())
}

/// Create the tasks router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(task_list).post(task_add))
        .route("/{task}", delete(task_delete))
}
