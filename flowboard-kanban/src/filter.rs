//! Search and column filtering

use crate::error::KanbanError;
use crate::types::{Status, Task};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which columns are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn shows(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Case-insensitive match on title or task number. A blank query matches everything.
pub fn filter_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    if query.trim().is_empty() {
        return tasks.to_vec();
    }

    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task.task_number.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TaskId, TaskNumber};

    fn task(title: &str, number: &str) -> Task {
        Task {
            id: TaskId::new(),
            task_number: TaskNumber::from_string(number),
            title: title.into(),
            status: Status::Todo,
            created_at: 0,
            order: 0,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("Write README", "TASK-001"),
            task("Fix login bug", "TASK-002"),
            task("Review PR", "TASK-010"),
        ]
    }

    #[test]
    fn test_blank_query_returns_all() {
        assert_eq!(filter_tasks(&sample(), "").len(), 3);
        assert_eq!(filter_tasks(&sample(), "   ").len(), 3);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let found = filter_tasks(&sample(), "readme");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Write README");
    }

    #[test]
    fn test_task_number_match() {
        assert_eq!(filter_tasks(&sample(), "task-002").len(), 1);
        assert_eq!(filter_tasks(&sample(), "TASK-0").len(), 3);
    }

    #[test]
    fn test_no_match_and_missing_numbers() {
        assert!(filter_tasks(&sample(), "nothing").is_empty());
        assert!(filter_tasks(&[], "x").is_empty());

        let unnumbered = vec![task("Plain", "")];
        assert_eq!(filter_tasks(&unnumbered, "plain").len(), 1);
        assert!(filter_tasks(&unnumbered, "task").is_empty());
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.shows(Status::Done));
        let only: StatusFilter = "inProgress".parse().unwrap();
        assert!(only.shows(Status::InProgress));
        assert!(!only.shows(Status::Todo));
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    }
}
