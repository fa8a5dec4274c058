//! Drag session state machine.
//!
//! ```text
//!            begin_drag                 commit_drop / cancel_drag
//!   IDLE  ───────────────▶  DRAGGING  ─────────────────────────────▶  IDLE
//!                            │    ▲
//!                            └────┘ update_pointer
//! ```
//!
//! A second `begin_drag` while dragging is ignored; only one session exists at
//! a time. Every anomaly (stale task id, update while idle, drop without a
//! target) degrades to a no-op and is logged at debug level.

use super::layout::{BoardLayout, Point};
use super::pointer::{PointerEvent, PointerEventKind};
use super::resolver::{resolve_drop_target, DropTarget};
use crate::reorder;
use crate::types::{Status, Task, TaskId, TaskNumber};
use serde::Serialize;

/// Pixels a press must travel on either axis before it becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Live session data. Only exists while dragging.
#[derive(Debug, Clone)]
struct DragSession {
    /// Snapshot taken at drag start; later store edits do not reach it
    task: Task,
    pointer: Point,
    drag_over_column: Option<Status>,
    drop_target: Option<DropTarget>,
}

/// A press on a card that has not yet crossed the drag threshold
#[derive(Debug, Clone)]
struct PendingPress {
    task: Task,
    origin: Point,
}

/// Read-only view of the drag for rendering the ghost card and drop indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    pub phase: DragPhase,
    pub is_dragging: bool,
    pub dragged_task_id: Option<TaskId>,
    pub ghost_title: Option<String>,
    pub ghost_task_number: Option<TaskNumber>,
    pub pointer_position: Point,
    pub drag_over_column: Option<Status>,
    pub drop_target: Option<DropTarget>,
    /// The presentation layer should disable text selection while set
    pub selection_suppressed: bool,
}

/// Result of ending a session
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Session ended without touching any task
    Cancelled,
    /// The dragged task no longer exists; nothing changed
    Ignored { task_id: TaskId },
    /// Same-column drop
    Reordered {
        task_id: TaskId,
        column: Status,
        index: usize,
        tasks: Vec<Task>,
    },
    /// Cross-column drop; the task was appended to `to`
    Moved {
        task_id: TaskId,
        from: Status,
        to: Status,
        tasks: Vec<Task>,
    },
}

impl DropOutcome {
    /// The new task list, when the drop changed anything
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Reordered { tasks, .. } | Self::Moved { tasks, .. } => Some(tasks),
            Self::Cancelled | Self::Ignored { .. } => None,
        }
    }

    pub fn into_tasks(self) -> Option<Vec<Task>> {
        match self {
            Self::Reordered { tasks, .. } | Self::Moved { tasks, .. } => Some(tasks),
            Self::Cancelled | Self::Ignored { .. } => None,
        }
    }
}

/// Owner of the single in-flight drag gesture
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    pending: Option<PendingPress>,
    drag_threshold: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            session: None,
            pending: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }

    /// Use a different activation threshold for [`handle_event`](Self::handle_event)
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session for `task`. Returns false, leaving the current session
    /// untouched, when one is already active.
    pub fn begin_drag(&mut self, task: &Task, position: Point) -> bool {
        if let Some(active) = &self.session {
            tracing::debug!(
                active = %active.task.id,
                requested = %task.id,
                "begin_drag ignored: session already active"
            );
            return false;
        }

        tracing::trace!(task = %task.id, x = position.x, y = position.y, "drag started");
        self.pending = None;
        self.session = Some(DragSession {
            task: task.clone(),
            pointer: position,
            drag_over_column: None,
            drop_target: None,
        });
        true
    }

    /// Track the pointer and re-resolve the drop target.
    ///
    /// When the pointer is outside the board horizontally the previously
    /// resolved column and target are kept.
    pub fn update_pointer(&mut self, position: Point, layout: &BoardLayout) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.pointer = position;
        if let Some(target) =
            resolve_drop_target(layout, position.x, position.y, Some(&session.task.id))
        {
            session.drag_over_column = Some(target.column);
            session.drop_target = Some(target);
        }
    }

    /// Finish the session, applying the drop to `tasks`.
    ///
    /// Without a resolved target this is a cancel. A drop into the dragged
    /// task's own column reorders it to the target slot; a drop into another
    /// column appends it there and ignores the slot. The session always ends.
    pub fn commit_drop(&mut self, tasks: &[Task]) -> DropOutcome {
        let Some(session) = self.session.take() else {
            return DropOutcome::Cancelled;
        };
        let Some(target) = session.drop_target else {
            tracing::trace!(task = %session.task.id, "drop without target, cancelling");
            return DropOutcome::Cancelled;
        };

        let task_id = session.task.id;
        let Some(current) = tasks.iter().find(|t| t.id == task_id) else {
            tracing::debug!(task = %task_id, "drop ignored: task no longer exists");
            return DropOutcome::Ignored { task_id };
        };

        if current.status == target.column {
            let tasks = reorder::reorder_to_slot(tasks, &task_id, target.insert_index);
            DropOutcome::Reordered {
                task_id,
                column: target.column,
                index: target.insert_index,
                tasks,
            }
        } else {
            let from = current.status;
            let tasks = reorder::move_task(tasks, &task_id, target.column);
            DropOutcome::Moved {
                task_id,
                from,
                to: target.column,
                tasks,
            }
        }
    }

    /// End the session without touching any task. Safe to call at any time.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::trace!(task = %session.task.id, "drag cancelled");
        }
        self.pending = None;
    }

    /// Drive the controller from a raw pointer event.
    ///
    /// `Start` only arms a pending press; the drag begins on the first `Move`
    /// beyond the threshold. Returns `Some` when a session ended.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        layout: &BoardLayout,
        tasks: &[Task],
    ) -> Option<DropOutcome> {
        match event.kind {
            PointerEventKind::Start => {
                if self.session.is_some() {
                    tracing::debug!("press ignored: session already active");
                    return None;
                }
                self.pending = event.task.as_ref().map(|task| PendingPress {
                    task: task.clone(),
                    origin: event.position,
                });
                None
            }
            PointerEventKind::Move => {
                if self.session.is_none() {
                    let crossed = self
                        .pending
                        .as_ref()
                        .filter(|press| event.position.exceeds(press.origin, self.drag_threshold))
                        .map(|press| press.task.clone());
                    match crossed {
                        Some(task) => {
                            self.begin_drag(&task, event.position);
                        }
                        None => return None,
                    }
                }
                self.update_pointer(event.position, layout);
                None
            }
            PointerEventKind::End => {
                self.pending = None;
                if self.session.is_none() {
                    return None;
                }
                Some(self.commit_drop(tasks))
            }
            PointerEventKind::Cancel => {
                let was_dragging = self.session.is_some();
                self.cancel_drag();
                was_dragging.then_some(DropOutcome::Cancelled)
            }
        }
    }

    /// Snapshot for the presentation layer
    pub fn state(&self) -> DragState {
        match &self.session {
            Some(session) => DragState {
                phase: DragPhase::Dragging,
                is_dragging: true,
                dragged_task_id: Some(session.task.id.clone()),
                ghost_title: Some(session.task.title.clone()),
                ghost_task_number: Some(session.task.task_number.clone()),
                pointer_position: session.pointer,
                drag_over_column: session.drag_over_column,
                drop_target: session.drop_target,
                selection_suppressed: true,
            },
            None => DragState {
                phase: DragPhase::Idle,
                is_dragging: false,
                dragged_task_id: None,
                ghost_title: None,
                ghost_task_number: None,
                pointer_position: Point::default(),
                drag_over_column: None,
                drop_target: None,
                selection_suppressed: false,
            },
        }
    }
}
