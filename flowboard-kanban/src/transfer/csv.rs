//! CSV rendering

use crate::types::Task;

/// Header row of every CSV export
pub const CSV_HEADER: &str = "ID,Task Number,Title,Status,Created At,Order";

/// Quote a field, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render tasks as CSV, one row per task, newline separated
pub fn to_csv(tasks: &[Task]) -> String {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for task in tasks {
        lines.push(format!(
            "{},{},{},{},{},{}",
            task.id,
            task.task_number,
            quote(&task.title),
            task.status,
            task.created_at,
            task.order
        ));
    }
    lines.join("\n")
}
