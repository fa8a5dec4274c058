//! Rendered board geometry, as measured by the presentation layer

use crate::reorder;
use crate::types::{Status, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when either axis moved strictly more than `threshold` from `origin`
    pub fn exceeds(&self, origin: Point, threshold: f64) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}

/// Vertical extent of one rendered card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRect {
    pub task_id: TaskId,
    /// Top edge in viewport coordinates
    pub top: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(task_id: impl Into<TaskId>, top: f64, height: f64) -> Self {
        Self {
            task_id: task_id.into(),
            top,
            height,
        }
    }

    /// Vertical midpoint relative to `origin_y`
    pub fn midpoint_from(&self, origin_y: f64) -> f64 {
        self.top + self.height / 2.0 - origin_y
    }
}

/// One rendered column: its top edge and its cards in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    pub status: Status,
    pub origin_y: f64,
    pub cards: Vec<CardRect>,
}

impl ColumnLayout {
    pub fn new(status: Status, origin_y: f64) -> Self {
        Self {
            status,
            origin_y,
            cards: Vec::new(),
        }
    }

    /// Append a card below the previous one
    pub fn with_card(mut self, card: CardRect) -> Self {
        self.cards.push(card);
        self
    }

    /// Lay out `ids` as a uniform stack of cards starting at the column top
    pub fn stacked<I, T>(status: Status, origin_y: f64, card_height: f64, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        let cards = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| CardRect::new(id, origin_y + i as f64 * card_height, card_height))
            .collect();
        Self {
            status,
            origin_y,
            cards,
        }
    }
}

/// The whole board: horizontal extent plus every visible column, left to right.
///
/// Columns split the board width evenly, so the column count used for hit
/// testing is simply `columns.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLayout {
    pub origin_x: f64,
    pub width: f64,
    pub columns: Vec<ColumnLayout>,
}

impl BoardLayout {
    pub fn new(origin_x: f64, width: f64, columns: Vec<ColumnLayout>) -> Self {
        Self {
            origin_x,
            width,
            columns,
        }
    }

    /// Uniform grid of every column: equal widths starting at x = 0, cards
    /// stacked from y = 0 in `order`.
    pub fn uniform(tasks: &[Task], column_width: f64, card_height: f64) -> Self {
        let columns = Status::ALL
            .iter()
            .map(|&status| {
                let ids = reorder::column_tasks(tasks, status).into_iter().map(|t| t.id);
                ColumnLayout::stacked(status, 0.0, card_height, ids)
            })
            .collect::<Vec<_>>();
        Self::new(0.0, column_width * columns.len() as f64, columns)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, status: Status) -> Option<&ColumnLayout> {
        self.columns.iter().find(|c| c.status == status)
    }
}
