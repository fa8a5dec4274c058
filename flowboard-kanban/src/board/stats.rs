//! GetStats command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::stats::ExportStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task counts per column plus the oldest and newest creation dates
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetStats;

crate::operation!(
    GetStats,
    verb = "get",
    noun = "stats",
    description = "Summarize the tasks on the board",
    read_only
);

impl GetStats {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetStats {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let tasks = ctx.read_tasks().await?;
        Ok(serde_json::to_value(ExportStats::from_tasks(&tasks))?)
    }
}
