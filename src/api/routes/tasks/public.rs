//! Public types for the tasks API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddTaskRequest {
    pub task: String,
}

#[derive(Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<String>,
}
