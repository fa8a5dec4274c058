//! Entries of `activity.jsonl`, one JSON object per line.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// `"<verb> <noun>"` of the executed command
    pub op: String,
    pub input: Value,
    /// Command result, or `{"error": message}` when it failed
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub duration_ms: u64,
}

impl LogEntry {
    /// Record the outcome of one mutation
    pub fn record(
        op: impl Into<String>,
        input: Value,
        result: &Result<Value>,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        let output = match result {
            Ok(value) => value.clone(),
            Err(e) => json!({ "error": e.to_string() }),
        };

        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Error message of a failed command
    pub fn error(&self) -> Option<&str> {
        self.output.get("error").and_then(Value::as_str)
    }
}
