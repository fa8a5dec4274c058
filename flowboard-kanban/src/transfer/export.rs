//! JSON and CSV export

use super::csv::to_csv;
use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::operation::{async_trait, Execute};
use crate::types::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Format version written into every JSON export
pub const EXPORT_VERSION: &str = "1.0";

/// Top-level object of a JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

impl ExportEnvelope {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            export_date: Utc::now(),
            tasks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Render `tasks` in this format
    pub fn render(&self, tasks: Vec<Task>) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&ExportEnvelope::new(tasks))?),
            ExportFormat::Csv => Ok(to_csv(&tasks)),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(KanbanError::invalid_value(
                "format",
                format!("expected json or csv, got '{}'", other),
            )),
        }
    }
}

/// Export every task. Writes to `output` when given, otherwise returns the
/// rendered content.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportTasks {
    #[serde(default)]
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
}

crate::operation!(
    ExportTasks,
    verb = "export",
    noun = "tasks",
    description = "Export all tasks as JSON or CSV",
    read_only
);

impl ExportTasks {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            output: None,
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ExportTasks {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let tasks = ctx.read_tasks().await?;
        let count = tasks.len();
        let content = self.format.render(tasks)?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, content).await?;
                tracing::info!(path = %path.display(), count, "exported tasks");
                Ok(json!({
                    "format": self.format,
                    "count": count,
                    "path": path.display().to_string(),
                }))
            }
            None => Ok(json!({
                "format": self.format,
                "count": count,
                "content": content,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::test_support::board_with;
    use crate::transfer::CSV_HEADER;

    #[tokio::test]
    async fn test_export_json_envelope() {
        let (_temp, ctx, _) = board_with(&["A", "B"]).await;

        let result = ExportTasks::new(ExportFormat::Json).execute(&ctx).await.unwrap();
        assert_eq!(result["count"], 2);

        let envelope: ExportEnvelope =
            serde_json::from_str(result["content"].as_str().unwrap()).unwrap();
        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_export_csv_to_file() {
        let (temp, ctx, _) = board_with(&["A"]).await;
        let path = temp.path().join("board.csv");

        let result = ExportTasks::new(ExportFormat::Csv)
            .with_output(&path)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["format"], "csv");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
