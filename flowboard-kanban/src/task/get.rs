//! GetTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a task by ID
#[derive(Debug, Deserialize, Serialize)]
pub struct GetTask {
    pub id: TaskId,
}

crate::operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Retrieve a task by ID",
    read_only
);

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let state = ctx.read_state().await?;
        let task = state.get(&self.id).ok_or_else(|| KanbanError::TaskNotFound {
            id: self.id.to_string(),
        })?;
        Ok(serde_json::to_value(task)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::test_support::board_with;

    #[tokio::test]
    async fn test_get_task() {
        let (_temp, ctx, ids) = board_with(&["A"]).await;

        let result = GetTask::new(ids[0].clone()).execute(&ctx).await.unwrap();
        assert_eq!(result["title"], "A");

        let missing = GetTask::new("task-missing").execute(&ctx).await;
        assert!(matches!(missing, Err(KanbanError::TaskNotFound { .. })));
    }
}
