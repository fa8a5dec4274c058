//! AddTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Add a new task at the bottom of To Do
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// The task title (trimmed, 1 to 200 characters)
    pub title: String,
}

crate::operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task on the board"
);

impl AddTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for AddTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let task = state.add_task(&self.title)?;
        ctx.write_state(&state).await?;

        Ok(serde_json::to_value(&task)?)
    }
}
