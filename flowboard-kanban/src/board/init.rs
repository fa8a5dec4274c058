//! InitBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::settings::Settings;
use crate::store::BoardState;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Initialize a new, empty board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitBoard {
    /// Initial settings; defaults when omitted
    pub settings: Option<Settings>,
}

crate::operation!(
    InitBoard,
    verb = "init",
    noun = "board",
    description = "Initialize a new kanban board"
);

impl InitBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for InitBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if ctx.is_initialized() {
            return Err(KanbanError::AlreadyExists {
                path: ctx.root().to_path_buf(),
            });
        }

        ctx.create_directories().await?;
        ctx.write_state(&BoardState::new()).await?;

        let settings = self.settings.clone().unwrap_or_default();
        ctx.write_settings(&settings).await?;

        Ok(json!({
            "root": ctx.root().display().to_string(),
            "settings": settings,
            "tasks": [],
        }))
    }
}
