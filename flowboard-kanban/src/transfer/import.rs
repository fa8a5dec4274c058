//! JSON import
//!
//! Entries are checked one by one; invalid ones are reported and skipped
//! rather than failing the whole file.

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::{Status, Task};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Problems with one stored or imported task. Empty when the value is usable.
pub fn validate_task_value(value: &Value) -> Vec<String> {
    let Some(task) = value.as_object() else {
        return vec!["Task must be an object".to_string()];
    };

    let mut errors = Vec::new();
    let non_blank = |key: &str| {
        task.get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };

    if !non_blank("id") {
        errors.push("Task must have a valid id".to_string());
    }
    if !non_blank("title") {
        errors.push("Task must have a valid title".to_string());
    }
    let status_ok = task
        .get("status")
        .is_some_and(|s| serde_json::from_value::<Status>(s.clone()).is_ok());
    if !status_ok {
        errors.push("Task must have a valid status".to_string());
    }
    if !task.get("createdAt").is_some_and(|v| v.as_i64().is_some()) {
        errors.push("Task must have a valid createdAt timestamp".to_string());
    }
    if !task.get("order").is_some_and(|v| v.as_u64().is_some()) {
        errors.push("Task must have a valid order number".to_string());
    }

    errors
}

/// Outcome of reading an import file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub tasks: Vec<Task>,
    /// Number of valid tasks
    pub count: usize,
    /// One `Task N: reason` line per skipped entry
    pub errors: Vec<String>,
    pub skipped: usize,
}

/// Parse the content of an export file. Task numbers are left as found;
/// missing ones are handed out when the tasks are merged into a board.
pub fn parse_import(content: &str) -> Result<ImportReport> {
    let data: Value = serde_json::from_str(content)
        .map_err(|e| KanbanError::import(format!("Failed to parse file: {}", e)))?;

    let entries = data
        .get("tasks")
        .and_then(Value::as_array)
        .ok_or_else(|| KanbanError::import("Invalid file format. Expected tasks array."))?;

    let mut tasks = Vec::new();
    let mut errors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let problems = validate_task_value(entry);
        if !problems.is_empty() {
            errors.push(format!("Task {}: {}", index + 1, problems.join(", ")));
            continue;
        }

        match serde_json::from_value::<Task>(entry.clone()) {
            Ok(task) => tasks.push(task),
            Err(e) => errors.push(format!("Task {}: {}", index + 1, e)),
        }
    }

    if tasks.is_empty() {
        return Err(KanbanError::import("No valid tasks found in file."));
    }

    Ok(ImportReport {
        count: tasks.len(),
        skipped: errors.len(),
        tasks,
        errors,
    })
}

/// Read and parse an export file. Only `.json` files are accepted.
pub async fn import_json(path: &Path) -> Result<ImportReport> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(KanbanError::import(
            "Invalid file type. Please select a JSON file.",
        ));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| KanbanError::import(format!("Failed to read file: {}", e)))?;
    parse_import(&content)
}

/// Merge the tasks of a JSON export into the board. Tasks whose id is already
/// on the board are skipped.
#[derive(Debug, Deserialize, Serialize)]
pub struct ImportTasks {
    pub path: PathBuf,
}

crate::operation!(
    ImportTasks,
    verb = "import",
    noun = "tasks",
    description = "Merge tasks from a JSON export into the board"
);

impl ImportTasks {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ImportTasks {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let report = import_json(&self.path).await?;
        let mut state = ctx.read_state().await?;

        let added = state.merge(report.tasks);
        ctx.write_state(&state).await?;

        for error in &report.errors {
            tracing::warn!("Skipped during import: {}", error);
        }
        Ok(json!({
            "imported": added,
            "duplicates": report.count - added,
            "skipped": report.skipped,
            "errors": report.errors,
        }))
    }
}
