//! In-memory task store.
//!
//! [`BoardState`] is the whole persisted board: the task list plus the task
//! number counter. All mutations go through it; loading and saving is the job
//! of [`BoardContext`](crate::BoardContext).

use crate::error::{KanbanError, Result};
use crate::filter::{filter_tasks, StatusFilter};
use crate::reorder;
use crate::stats::TaskCounts;
use crate::types::{validate_title, Status, Task, TaskId, TaskNumber};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The store operations the drag-and-drop engine relies on
pub trait TaskStore {
    /// Every task, in storage order
    fn tasks(&self) -> &[Task];

    /// Tasks of one column sorted by `order` ascending
    fn tasks_by_status(&self, status: Status) -> Vec<Task> {
        reorder::column_tasks(self.tasks(), status)
    }

    /// Replace the whole list
    fn set_tasks(&mut self, tasks: Vec<Task>);

    /// Move a task to another column (appended at the end)
    fn move_task(&mut self, id: &TaskId, status: Status) {
        let moved = reorder::move_task(self.tasks(), id, status);
        self.set_tasks(moved);
    }
}

/// Board contents: tasks and the last issued task number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub last_task_number: u64,
}

impl TaskStore for BoardState {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from loaded tasks, recovering the counter when no stored
    /// value exists.
    pub fn from_tasks(tasks: Vec<Task>, last_task_number: Option<u64>) -> Self {
        let last_task_number =
            last_task_number.unwrap_or_else(|| highest_task_number(&tasks));
        Self {
            tasks,
            last_task_number,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn require(&self, id: &TaskId) -> Result<&Task> {
        self.get(id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })
    }

    /// Create a task at the bottom of To Do
    pub fn add_task(&mut self, title: &str) -> Result<Task> {
        let title = validate_title(title)?;

        self.last_task_number += 1;
        let order = self.tasks_by_status(Status::Todo).len();
        let task = Task::new(title, TaskNumber::from_sequence(self.last_task_number), order);

        tracing::debug!(task = %task.id, number = %task.task_number, "added task");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Remove a task and close the gap it leaves in its column
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })?;
        let removed = self.tasks.remove(index);

        let mut column = reorder::column_tasks(&self.tasks, removed.status);
        reorder::renumber(&mut column);
        self.tasks.retain(|t| t.status != removed.status);
        self.tasks.extend(column);

        tracing::debug!(task = %removed.id, "deleted task");
        Ok(removed)
    }

    /// Change a task's title
    pub fn update_title(&mut self, id: &TaskId, title: &str) -> Result<Task> {
        let title = validate_title(title)?.to_string();
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| KanbanError::TaskNotFound { id: id.to_string() })?;
        task.title = title;
        Ok(task.clone())
    }

    /// Move to a column, returning the updated task
    pub fn move_to(&mut self, id: &TaskId, status: Status) -> Result<Task> {
        self.require(id)?;
        self.move_task(id, status);
        self.require(id).cloned()
    }

    /// Move one column to the right; `None` when already in Done
    pub fn move_right(&mut self, id: &TaskId) -> Result<Option<Task>> {
        match self.require(id)?.status.next() {
            Some(next) => self.move_to(id, next).map(Some),
            None => Ok(None),
        }
    }

    /// Move one column to the left; `None` when already in To Do
    pub fn move_left(&mut self, id: &TaskId) -> Result<Option<Task>> {
        match self.require(id)?.status.previous() {
            Some(previous) => self.move_to(id, previous).map(Some),
            None => Ok(None),
        }
    }

    /// Move a task to `slot` within its column (slot counted without the task)
    pub fn reorder(&mut self, id: &TaskId, slot: usize) -> Result<Task> {
        self.require(id)?;
        self.tasks = reorder::reorder_to_slot(&self.tasks, id, slot);
        self.require(id).cloned()
    }

    /// Drop every task. The task number counter is kept so numbers are never reused.
    pub fn clear(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Append tasks whose ids are not on the board yet, then restore dense
    /// ordering. An incoming task keeps its number only when no other task on
    /// the board has it; otherwise, or when it has none, it takes the next
    /// number from the counter. Returns the number of tasks added.
    pub fn merge(&mut self, incoming: Vec<Task>) -> usize {
        let before = self.tasks.len();
        let mut taken: HashSet<TaskNumber> =
            self.tasks.iter().map(|t| t.task_number.clone()).collect();

        for mut task in incoming {
            if self.get(&task.id).is_some() {
                continue;
            }

            if task.task_number.is_empty() || taken.contains(&task.task_number) {
                task.task_number = self.allocate_task_number(&taken);
            } else if let Some(seq) = task.task_number.sequence() {
                self.last_task_number = self.last_task_number.max(seq);
            }
            taken.insert(task.task_number.clone());
            self.tasks.push(task);
        }

        self.tasks = reorder::normalize(&self.tasks);
        self.tasks.len() - before
    }

    /// Advance the counter to the next number nobody holds
    fn allocate_task_number(&mut self, taken: &HashSet<TaskNumber>) -> TaskNumber {
        loop {
            self.last_task_number += 1;
            let number = TaskNumber::from_sequence(self.last_task_number);
            if !taken.contains(&number) {
                return number;
            }
        }
    }

    /// Visible tasks of one column: sorted, then narrowed by the search query
    pub fn visible_column(&self, status: Status, query: &str, filter: StatusFilter) -> Vec<Task> {
        if !filter.shows(status) {
            return Vec::new();
        }
        filter_tasks(&self.tasks_by_status(status), query)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }
}

/// Highest `TASK-NNN` sequence on the board, 0 when there is none
pub fn highest_task_number(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .filter_map(|t| t.task_number.sequence())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(titles: &[&str]) -> BoardState {
        let mut board = BoardState::new();
        for title in titles {
            board.add_task(title).unwrap();
        }
        board
    }

    fn id_of(board: &BoardState, title: &str) -> TaskId {
        board
            .tasks
            .iter()
            .find(|t| t.title == title)
            .unwrap()
            .id
            .clone()
    }

    fn column_titles(board: &BoardState, status: Status) -> Vec<String> {
        board
            .tasks_by_status(status)
            .into_iter()
            .map(|t| t.title)
            .collect()
    }

    #[test]
    fn test_add_assigns_numbers_and_order() {
        let board = board_with(&["A", "B", "C"]);
        let numbers: Vec<&str> = board.tasks.iter().map(|t| t.task_number.as_str()).collect();
        assert_eq!(numbers, ["TASK-001", "TASK-002", "TASK-003"]);
        let orders: Vec<usize> = board.tasks.iter().map(|t| t.order).collect();
        assert_eq!(orders, [0, 1, 2]);
        assert_eq!(board.last_task_number, 3);
    }

    #[test]
    fn test_add_rejects_bad_titles() {
        let mut board = BoardState::new();
        assert!(matches!(
            board.add_task("   "),
            Err(KanbanError::InvalidTitle { .. })
        ));
        assert!(board.add_task(&"x".repeat(201)).is_err());
        assert_eq!(board.last_task_number, 0);
    }

    #[test]
    fn test_numbers_are_never_reused() {
        let mut board = board_with(&["A", "B"]);
        let b = id_of(&board, "B");
        board.delete_task(&b).unwrap();
        let c = board.add_task("C").unwrap();
        assert_eq!(c.task_number.as_str(), "TASK-003");

        board.clear();
        let d = board.add_task("D").unwrap();
        assert_eq!(d.task_number.as_str(), "TASK-004");
    }

    #[test]
    fn test_delete_closes_gap() {
        let mut board = board_with(&["A", "B", "C"]);
        let b = id_of(&board, "B");
        board.delete_task(&b).unwrap();
        let orders: Vec<usize> = board
            .tasks_by_status(Status::Todo)
            .iter()
            .map(|t| t.order)
            .collect();
        assert_eq!(orders, [0, 1]);
        assert!(board.delete_task(&b).is_err());
    }

    #[test]
    fn test_move_left_and_right() {
        let mut board = board_with(&["A"]);
        let a = id_of(&board, "A");

        assert!(board.move_left(&a).unwrap().is_none());
        assert_eq!(board.move_right(&a).unwrap().unwrap().status, Status::InProgress);
        assert_eq!(board.move_right(&a).unwrap().unwrap().status, Status::Done);
        assert!(board.move_right(&a).unwrap().is_none());
        assert_eq!(board.move_left(&a).unwrap().unwrap().status, Status::InProgress);
    }

    #[test]
    fn test_task_store_move_keeps_columns_dense() {
        let mut board = board_with(&["A", "B", "C"]);
        let a = id_of(&board, "A");
        TaskStore::move_task(&mut board, &a, Status::Done);

        assert_eq!(column_titles(&board, Status::Todo), ["B", "C"]);
        let orders: Vec<usize> = board
            .tasks_by_status(Status::Todo)
            .iter()
            .map(|t| t.order)
            .collect();
        assert_eq!(orders, [0, 1]);
        assert_eq!(board.get(&a).unwrap().order, 0);
    }

    #[test]
    fn test_reorder_by_slot() {
        let mut board = board_with(&["A", "B", "C"]);
        let a = id_of(&board, "A");
        board.reorder(&a, 2).unwrap();
        assert_eq!(column_titles(&board, Status::Todo), ["B", "C", "A"]);
    }

    #[test]
    fn test_update_title() {
        let mut board = board_with(&["A"]);
        let a = id_of(&board, "A");
        assert_eq!(board.update_title(&a, "  Renamed ").unwrap().title, "Renamed");
        assert!(board.update_title(&a, "").is_err());
        assert!(board.update_title(&"missing".into(), "x").is_err());
    }

    #[test]
    fn test_counter_recovered_from_tasks() {
        let board = board_with(&["A", "B", "C"]);
        let recovered = BoardState::from_tasks(board.tasks.clone(), None);
        assert_eq!(recovered.last_task_number, 3);

        let stored = BoardState::from_tasks(board.tasks, Some(10));
        assert_eq!(stored.last_task_number, 10);
    }

    #[test]
    fn test_merge_skips_existing_ids_and_renormalizes() {
        let mut board = board_with(&["A", "B"]);
        let mut incoming = board.tasks[0].clone();
        incoming.title = "duplicate".into();

        let mut fresh = Task::new("Imported", TaskNumber::from_sequence(40), 0);
        fresh.order = 7;

        let added = board.merge(vec![incoming, fresh]);
        assert_eq!(added, 1);
        assert_eq!(column_titles(&board, Status::Todo), ["A", "B", "Imported"]);
        assert_eq!(board.tasks_by_status(Status::Todo)[2].order, 2);
        assert_eq!(board.last_task_number, 40);
    }

    #[test]
    fn test_merge_gives_fresh_numbers_to_missing_and_clashing() {
        let mut board = board_with(&["Local", "Gone"]);
        board.delete_task(&id_of(&board, "Gone")).unwrap();

        let unnumbered = Task::new("Unnumbered", TaskNumber::default(), 0);
        let clashing = Task::new("Clashing", TaskNumber::from_sequence(1), 1);
        let kept = Task::new("Kept", TaskNumber::from_sequence(9), 2);

        assert_eq!(board.merge(vec![unnumbered, clashing, kept]), 3);

        let number_of = |title: &str| {
            board
                .tasks
                .iter()
                .find(|t| t.title == title)
                .map(|t| t.task_number.as_str().to_string())
                .unwrap()
        };
        // TASK-002 belonged to the deleted task and is not handed out again
        assert_eq!(number_of("Local"), "TASK-001");
        assert_eq!(number_of("Unnumbered"), "TASK-003");
        assert_eq!(number_of("Clashing"), "TASK-004");
        assert_eq!(number_of("Kept"), "TASK-009");
        assert_eq!(board.last_task_number, 9);

        let next = board.add_task("After").unwrap();
        assert_eq!(next.task_number.as_str(), "TASK-010");
    }

    #[test]
    fn test_visible_column_applies_filter_and_search() {
        let board = board_with(&["Write docs", "Fix bug", "Docs review"]);
        let visible = board.visible_column(Status::Todo, "docs", StatusFilter::All);
        assert_eq!(visible.len(), 2);

        let hidden = board.visible_column(
            Status::Todo,
            "",
            StatusFilter::Only(Status::Done),
        );
        assert!(hidden.is_empty());
    }
}
