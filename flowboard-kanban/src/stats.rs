//! Board statistics for the header and the export dialog

use crate::types::{Status, Task};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Per-column and total task counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub total: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut counts = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                Status::Todo => counts.todo += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Done => counts.done += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Todo => self.todo,
            Status::InProgress => self.in_progress,
            Status::Done => self.done,
        }
    }
}

/// Summary shown before exporting
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    pub total: usize,
    pub by_status: TaskCounts,
    pub oldest_task: Option<DateTime<Utc>>,
    pub newest_task: Option<DateTime<Utc>>,
}

impl ExportStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let to_date = |ms: i64| Utc.timestamp_millis_opt(ms).single();
        Self {
            total: tasks.len(),
            by_status: TaskCounts::from_tasks(tasks),
            oldest_task: tasks.iter().map(|t| t.created_at).min().and_then(to_date),
            newest_task: tasks.iter().map(|t| t.created_at).max().and_then(to_date),
        }
    }
}
