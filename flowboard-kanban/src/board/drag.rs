//! DragTask command
//!
//! Replays a pointer path for one card against a uniform layout of the stored
//! board, the same way the presentation layer feeds live pointer events into
//! a [`DragController`].

use crate::context::BoardContext;
use crate::drag::{BoardLayout, DragController, DropOutcome, Point, PointerEvent};
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::store::TaskStore;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_COLUMN_WIDTH: f64 = 300.0;
pub const DEFAULT_CARD_HEIGHT: f64 = 80.0;

fn default_column_width() -> f64 {
    DEFAULT_COLUMN_WIDTH
}

fn default_card_height() -> f64 {
    DEFAULT_CARD_HEIGHT
}

fn default_release() -> bool {
    true
}

/// Drag a card along a pointer path and drop it where the path ends
#[derive(Debug, Deserialize, Serialize)]
pub struct DragTask {
    pub id: TaskId,
    /// Pointer positions; the first is the press on the card
    pub path: Vec<Point>,
    /// Release at the last position; `false` cancels the gesture instead
    #[serde(default = "default_release")]
    pub release: bool,
    #[serde(default = "default_column_width")]
    pub column_width: f64,
    #[serde(default = "default_card_height")]
    pub card_height: f64,
}

crate::operation!(
    DragTask,
    verb = "drag",
    noun = "task",
    description = "Drag a task along a pointer path and drop it"
);

impl DragTask {
    pub fn new(id: impl Into<TaskId>, path: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            path,
            release: true,
            column_width: DEFAULT_COLUMN_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
        }
    }

    /// Abort the gesture at the end of the path instead of dropping
    pub fn cancelled(mut self) -> Self {
        self.release = false;
        self
    }

    pub fn with_geometry(mut self, column_width: f64, card_height: f64) -> Self {
        self.column_width = column_width;
        self.card_height = card_height;
        self
    }

    fn events(&self, task: &crate::types::Task) -> Result<Vec<PointerEvent>> {
        let (first, rest) = self
            .path
            .split_first()
            .ok_or_else(|| KanbanError::invalid_value("path", "at least one point is required"))?;
        let last = rest.last().copied().unwrap_or(*first);

        let mut events = Vec::with_capacity(self.path.len() + 1);
        events.push(PointerEvent::start(task, *first));
        events.extend(rest.iter().map(|&p| PointerEvent::moved(p)));
        events.push(if self.release {
            PointerEvent::end(last)
        } else {
            PointerEvent::cancel()
        });
        Ok(events)
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DragTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if self.column_width <= 0.0 || self.card_height <= 0.0 {
            return Err(KanbanError::invalid_value(
                "geometry",
                "column width and card height must be positive",
            ));
        }

        let mut state = ctx.read_state().await?;
        let settings = ctx.read_settings().await;
        let task = state
            .get(&self.id)
            .cloned()
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        let layout = BoardLayout::uniform(state.tasks(), self.column_width, self.card_height);
        let mut controller = DragController::new().with_drag_threshold(settings.drag_threshold);

        let mut drop_target = None;
        let mut outcome = None;
        for event in self.events(&task)? {
            if let Some(target) = controller.state().drop_target {
                drop_target = Some(target);
            }
            if let Some(ended) = controller.handle_event(&event, &layout, state.tasks()) {
                outcome = Some(ended);
            }
        }

        let outcome = outcome.unwrap_or(DropOutcome::Cancelled);
        let result = match &outcome {
            DropOutcome::Cancelled => "cancelled",
            DropOutcome::Ignored { .. } => "ignored",
            DropOutcome::Reordered { .. } => "reordered",
            DropOutcome::Moved { .. } => "moved",
        };

        if let Some(tasks) = outcome.into_tasks() {
            state.set_tasks(tasks);
            ctx.write_state(&state).await?;
        }

        tracing::debug!(task = %self.id, outcome = result, "drag finished");
        Ok(json!({
            "outcome": result,
            "dropTarget": drop_target,
            "task": state.get(&self.id),
        }))
    }
}
