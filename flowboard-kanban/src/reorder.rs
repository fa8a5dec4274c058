//! Reorder engine: pure transformations of the task list.
//!
//! Both entry points take the full task list and return a new one. Display
//! order is fully determined by `status` + `order`, so the returned vector is
//! not sorted; callers sort each column by `order` before rendering.
//!
//! After any transformation here the `order` values of every touched column
//! are dense and zero based.

use crate::types::{Status, Task, TaskId};

/// Tasks of one column, sorted by `order` ascending.
///
/// Ties keep their relative position in `tasks`.
pub fn column_tasks(tasks: &[Task], status: Status) -> Vec<Task> {
    let mut column: Vec<Task> = tasks.iter().filter(|t| t.status == status).cloned().collect();
    column.sort_by_key(|t| t.order);
    column
}

/// Reassign `order = position` for every task in the slice
pub fn renumber(column: &mut [Task]) {
    for (index, task) in column.iter_mut().enumerate() {
        task.order = index;
    }
}

/// Move a task to `new_index` inside its own column.
///
/// `new_index` is an insertion index computed against the column *including*
/// the dragged card, so it is decremented by one when the task moves down.
/// Indexes past the end clamp to the end. Unknown ids return `tasks` unchanged.
pub fn reorder(tasks: &[Task], task_id: &TaskId, new_index: usize) -> Vec<Task> {
    let Some(status) = tasks.iter().find(|t| &t.id == task_id).map(|t| t.status) else {
        tracing::debug!(task = %task_id, "reorder ignored: unknown task");
        return tasks.to_vec();
    };

    let mut column = column_tasks(tasks, status);
    let Some(from) = column.iter().position(|t| &t.id == task_id) else {
        return tasks.to_vec();
    };

    let moved = column.remove(from);
    let target = if from < new_index {
        new_index - 1
    } else {
        new_index
    };
    let target = target.min(column.len());
    column.insert(target, moved);
    renumber(&mut column);

    tracing::debug!(task = %task_id, %status, from, to = target, "reordered task");

    let mut result: Vec<Task> = tasks.iter().filter(|t| t.status != status).cloned().collect();
    result.extend(column);
    result
}

/// Apply a same-column drop whose insertion index was resolved with the
/// dragged card left out of the column geometry.
///
/// The slot is converted to an index over the full column (slots at or after
/// the card's current position shift by one) and handed to [`reorder`], whose
/// removal correction then lands the card exactly at `slot`.
pub fn reorder_to_slot(tasks: &[Task], task_id: &TaskId, slot: usize) -> Vec<Task> {
    let Some(status) = tasks.iter().find(|t| &t.id == task_id).map(|t| t.status) else {
        tracing::debug!(task = %task_id, "drop ignored: unknown task");
        return tasks.to_vec();
    };
    let column = column_tasks(tasks, status);
    let Some(from) = column.iter().position(|t| &t.id == task_id) else {
        return tasks.to_vec();
    };

    let index = if slot >= from { slot + 1 } else { slot };
    reorder(tasks, task_id, index)
}

/// Move a task to another column.
///
/// The task is appended to the end of `new_status` (`order` = size of the
/// destination before the move) and the column it left is renumbered, so both
/// columns stay dense. Moving a task to the column it is already in, or an
/// unknown id, returns `tasks` unchanged.
pub fn move_task(tasks: &[Task], task_id: &TaskId, new_status: Status) -> Vec<Task> {
    let Some(task) = tasks.iter().find(|t| &t.id == task_id) else {
        tracing::debug!(task = %task_id, "move ignored: unknown task");
        return tasks.to_vec();
    };
    let old_status = task.status;
    if old_status == new_status {
        return tasks.to_vec();
    }

    let mut source = column_tasks(tasks, old_status);
    source.retain(|t| &t.id != task_id);
    renumber(&mut source);

    let mut destination = column_tasks(tasks, new_status);
    renumber(&mut destination);
    let mut moved = task.clone();
    moved.status = new_status;
    moved.order = destination.len();
    destination.push(moved);

    tracing::debug!(task = %task_id, from = %old_status, to = %new_status, "moved task");

    let mut result: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status != old_status && t.status != new_status)
        .cloned()
        .collect();
    result.extend(source);
    result.extend(destination);
    result
}

/// Renumber every column densely, keeping each column's current relative order
pub fn normalize(tasks: &[Task]) -> Vec<Task> {
    let mut result = Vec::with_capacity(tasks.len());
    for status in Status::ALL {
        let mut column = column_tasks(tasks, status);
        renumber(&mut column);
        result.extend(column);
    }
    result
}
