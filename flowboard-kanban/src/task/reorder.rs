//! ReorderTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Move a task within its column.
///
/// `index` is a slot among the column's other cards: 0 puts the task first,
/// anything at or past their count puts it last.
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderTask {
    pub id: TaskId,
    pub index: usize,
}

crate::operation!(
    ReorderTask,
    verb = "reorder",
    noun = "task",
    description = "Move a task to a new position within its column"
);

impl ReorderTask {
    pub fn new(id: impl Into<TaskId>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ReorderTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut state = ctx.read_state().await?;
        let task = state.reorder(&self.id, self.index)?;
        ctx.write_state(&state).await?;

        Ok(serde_json::to_value(&task)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;
    use crate::task::test_support::board_with;
    use crate::types::Status;

    async fn todo_titles(ctx: &BoardContext) -> Vec<String> {
        ctx.read_state()
            .await
            .unwrap()
            .tasks_by_status(Status::Todo)
            .into_iter()
            .map(|t| t.title)
            .collect()
    }

    #[tokio::test]
    async fn test_reorder_task() {
        let (_temp, ctx, ids) = board_with(&["A", "B", "C", "D"]).await;

        ReorderTask::new(ids[0].clone(), 2).execute(&ctx).await.unwrap();
        assert_eq!(todo_titles(&ctx).await, ["B", "C", "A", "D"]);

        let result = ReorderTask::new(ids[3].clone(), 0).execute(&ctx).await.unwrap();
        assert_eq!(result["order"], 0);
        assert_eq!(todo_titles(&ctx).await, ["D", "B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_reorder_clamps_index() {
        let (_temp, ctx, ids) = board_with(&["A", "B"]).await;

        ReorderTask::new(ids[0].clone(), 99).execute(&ctx).await.unwrap();
        assert_eq!(todo_titles(&ctx).await, ["B", "A"]);
    }

    #[tokio::test]
    async fn test_reorder_missing_task() {
        let (_temp, ctx, _) = board_with(&["A"]).await;

        let result = ReorderTask::new("task-missing", 0).execute(&ctx).await;
        assert!(matches!(result, Err(KanbanError::TaskNotFound { .. })));
    }
}
