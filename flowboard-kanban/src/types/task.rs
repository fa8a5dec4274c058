//! Task type and title validation

use super::ids::{TaskId, TaskNumber};
use super::status::Status;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};

/// Minimum trimmed title length
pub const TITLE_MIN_LENGTH: usize = 1;
/// Maximum trimmed title length
pub const TITLE_MAX_LENGTH: usize = 200;

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Older exports may lack a number; import fills it in
    #[serde(default)]
    pub task_number: TaskNumber,
    pub title: String,
    pub status: Status,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at: i64,
    /// Dense rank within the task's column
    pub order: usize,
}

impl Task {
    /// Create a new task in the To Do column. The title is trimmed, not validated.
    pub fn new(title: &str, task_number: TaskNumber, order: usize) -> Self {
        Self {
            id: TaskId::new(),
            task_number,
            title: title.trim().to_string(),
            status: Status::Todo,
            created_at: chrono::Utc::now().timestamp_millis(),
            order,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Validate a task title, returning the trimmed form
pub fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();

    if len < TITLE_MIN_LENGTH {
        return Err(KanbanError::invalid_title("Task title cannot be empty"));
    }
    if len > TITLE_MAX_LENGTH {
        return Err(KanbanError::invalid_title(format!(
            "Task title cannot exceed {} characters",
            TITLE_MAX_LENGTH
        )));
    }

    Ok(trimmed)
}
