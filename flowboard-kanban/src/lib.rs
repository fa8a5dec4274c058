//! Kanban board engine with drag-and-drop reordering and file-backed storage
//!
//! A board has three fixed columns (To Do, In Progress, Done). Every task
//! carries a dense `order` within its column. This crate provides the pieces
//! that keep that ordering intact while cards are dragged around:
//!
//! - **Drag session controller** ([`drag::DragController`]) - owns the single
//!   in-flight gesture, fed by mouse, touch or pen events alike
//! - **Drop-zone resolver** ([`drag::resolve_drop_target`]) - turns a pointer
//!   position plus measured geometry into a (column, slot) target
//! - **Reorder engine** ([`reorder`]) - pure functions that move a task within
//!   or across columns and renumber `order`
//!
//! Around them sits a small command layer: one struct per operation, executed
//! against a [`BoardContext`] that stores the board under `.flowboard/`.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use flowboard_kanban::{board::InitBoard, task::{AddTask, ReorderTask}, BoardContext, Execute};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::new("/path/to/repo/.flowboard");
//! InitBoard::new().execute(&ctx).await?;
//!
//! let first = AddTask::new("Write the docs").execute(&ctx).await?;
//! AddTask::new("Fix the bug").execute(&ctx).await?;
//!
//! // Put the first task after the second one
//! ReorderTask::new(first["id"].as_str().unwrap_or_default(), 1)
//!     .execute(&ctx)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! repo/
//! └── .flowboard/
//!     ├── tasks.json          # Task list
//!     ├── last_task_number    # Task number counter
//!     ├── settings.json       # Theme, completed-task visibility, drag threshold
//!     └── activity.jsonl      # Operation log
//! ```

mod context;
mod error;
pub mod filter;
pub mod log;
pub mod operation;
mod processor;
pub mod reorder;
pub mod settings;
pub mod stats;
pub mod store;
pub mod types;

pub mod drag;

// Command modules
pub mod board;
pub mod task;
pub mod transfer;

pub use operation::{async_trait, Execute, Operation};

pub use context::{BoardContext, BoardLock, BOARD_DIR_NAME};
pub use error::{KanbanError, Result};
pub use processor::KanbanOperationProcessor;

pub use log::LogEntry;
pub use settings::{Settings, Theme};
pub use store::{BoardState, TaskStore};
pub use types::{Status, Task, TaskId, TaskNumber};
