//! ClearTasks command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Remove every task from the board. Task numbers keep counting up.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClearTasks;

crate::operation!(
    ClearTasks,
    verb = "clear",
    noun = "tasks",
    description = "Delete every task on the board"
);

impl ClearTasks {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ClearTasks {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let removed = state.clear();
        ctx.write_state(&state).await?;

        tracing::info!(removed, "cleared board");
        Ok(json!({ "removed": removed }))
    }
}
