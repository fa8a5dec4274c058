//! ListTasks command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::filter::filter_tasks;
use crate::operation::{async_trait, Execute};
use crate::store::TaskStore;
use crate::types::{Status, Task};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// List tasks, column by column in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListTasks {
    /// Only this column
    pub status: Option<Status>,
    /// Search query matched against title and task number
    #[serde(default)]
    pub query: String,
}

crate::operation!(
    ListTasks,
    verb = "list",
    noun = "tasks",
    description = "List tasks with optional column and search filters",
    read_only
);

impl ListTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListTasks {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let state = ctx.read_state().await?;

        let tasks: Vec<Task> = Status::ALL
            .iter()
            .filter(|&&status| self.status.map_or(true, |only| only == status))
            .flat_map(|&status| filter_tasks(&state.tasks_by_status(status), &self.query))
            .collect();

        Ok(json!({ "tasks": tasks, "count": tasks.len() }))
    }
}
