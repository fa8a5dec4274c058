//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Delete a task; the rest of its column closes up
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    pub id: TaskId,
}

crate::operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task from the board"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let removed = state.delete_task(&self.id)?;
        ctx.write_state(&state).await?;

        Ok(json!({ "deleted": true, "id": removed.id, "taskNumber": removed.task_number }))
    }
}
