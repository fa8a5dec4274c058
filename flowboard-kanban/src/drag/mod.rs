//! Drag-and-drop engine
//!
//! The presentation layer measures the board into a [`BoardLayout`], feeds
//! [`PointerEvent`]s into a [`DragController`], and renders the
//! [`DragState`] snapshots it reads back. The controller never touches the
//! task store: a finished drop hands back a [`DropOutcome`] holding the
//! recomputed task list, which the caller writes with `TaskStore::set_tasks`.

mod controller;
mod layout;
mod pointer;
mod resolver;

pub use controller::{DragController, DragPhase, DragState, DropOutcome, DEFAULT_DRAG_THRESHOLD};
pub use layout::{BoardLayout, CardRect, ColumnLayout, Point};
pub use pointer::{PointerEvent, PointerEventKind, PointerSource};
pub use resolver::{
    card_midpoints, resolve_column_index, resolve_drop_target, resolve_insert_index, DropTarget,
};
