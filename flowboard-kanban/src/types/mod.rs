//! Core types for the kanban engine

mod ids;
mod status;
mod task;

// Re-export all types
pub use ids::{TaskId, TaskNumber};
pub use status::Status;
pub use task::{validate_title, Task, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH};
