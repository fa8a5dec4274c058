//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rename a task
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    pub id: TaskId,
    pub title: String,
}

crate::operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Change a task's title"
);

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for UpdateTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let task = state.update_title(&self.id, &self.title)?;
        ctx.write_state(&state).await?;

        Ok(serde_json::to_value(&task)?)
    }
}
