//! Source-agnostic pointer events

use super::layout::Point;
use crate::types::Task;
use serde::{Deserialize, Serialize};

/// Which device produced the event. Only kept for diagnostics; mouse, touch
/// and pen all take the same path through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    /// Press on a card
    Start,
    Move,
    /// Release
    End,
    /// Pointer capture lost or gesture aborted
    Cancel,
}

/// One event from the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    #[serde(default)]
    pub source: PointerSource,
    /// The pressed card; only meaningful for `Start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl PointerEvent {
    pub fn start(task: &Task, position: Point) -> Self {
        Self {
            kind: PointerEventKind::Start,
            position,
            source: PointerSource::default(),
            task: Some(task.clone()),
        }
    }

    pub fn moved(position: Point) -> Self {
        Self::bare(PointerEventKind::Move, position)
    }

    pub fn end(position: Point) -> Self {
        Self::bare(PointerEventKind::End, position)
    }

    pub fn cancel() -> Self {
        Self::bare(PointerEventKind::Cancel, Point::default())
    }

    pub fn from_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    fn bare(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            source: PointerSource::default(),
            task: None,
        }
    }
}
