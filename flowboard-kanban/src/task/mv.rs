//! MoveTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::{Status, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a task is moved to. The task always lands at the bottom of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveTarget {
    Column(Status),
    /// The previous column; no-op in To Do
    Left,
    /// The next column; no-op in Done
    Right,
}

/// Move a task to another column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    pub id: TaskId,
    pub target: MoveTarget,
}

crate::operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column"
);

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, target: MoveTarget) -> Self {
        Self {
            id: id.into(),
            target,
        }
    }

    /// Move to a column (at the end)
    pub fn to_column(id: impl Into<TaskId>, status: Status) -> Self {
        Self::new(id, MoveTarget::Column(status))
    }

    pub fn left(id: impl Into<TaskId>) -> Self {
        Self::new(id, MoveTarget::Left)
    }

    pub fn right(id: impl Into<TaskId>) -> Self {
        Self::new(id, MoveTarget::Right)
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for MoveTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let before = state
            .get(&self.id)
            .map(|t| t.status)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        let moved = match self.target {
            MoveTarget::Column(status) => Some(state.move_to(&self.id, status)?),
            MoveTarget::Left => state.move_left(&self.id)?,
            MoveTarget::Right => state.move_right(&self.id)?,
        };

        let task = match moved {
            Some(task) if task.status != before => {
                ctx.write_state(&state).await?;
                task
            }
            Some(task) => task,
            None => {
                tracing::debug!(task = %self.id, "move ignored: no column in that direction");
                state.get(&self.id).cloned().ok_or_else(|| KanbanError::TaskNotFound {
                    id: self.id.to_string(),
                })?
            }
        };

        let mut result = serde_json::to_value(&task)?;
        result["moved"] = Value::Bool(task.status != before);
        Ok(result)
    }
}
