//! Board-level commands

mod clear;
mod drag;
mod get;
mod init;
mod stats;

pub use clear::ClearTasks;
pub use drag::DragTask;
pub use get::GetBoard;
pub use init::InitBoard;
pub use stats::GetStats;
