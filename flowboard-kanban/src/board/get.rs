//! GetBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::filter::StatusFilter;
use crate::operation::{async_trait, Execute};
use crate::types::Status;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get the board as rendered: every column with its visible tasks
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard {
    /// Search query matched against title and task number
    #[serde(default)]
    pub query: String,
    /// Which columns show tasks
    #[serde(default)]
    pub filter: StatusFilter,
}

crate::operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get the board with its columns and task counts",
    read_only
);

impl GetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let state = ctx.read_state().await?;
        let settings = ctx.read_settings().await;
        let counts = state.counts();

        let columns: Vec<Value> = Status::ALL
            .iter()
            .map(|&status| {
                let tasks = if status == Status::Done && !settings.show_completed_tasks {
                    Vec::new()
                } else {
                    state.visible_column(status, &self.query, self.filter)
                };
                json!({
                    "status": status,
                    "title": status.title(),
                    "count": counts.get(status),
                    "tasks": tasks,
                })
            })
            .collect();

        Ok(json!({
            "columns": columns,
            "counts": counts,
            "settings": settings,
        }))
    }
}
