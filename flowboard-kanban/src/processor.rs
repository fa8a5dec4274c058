//! Operation processor
//!
//! Runs commands against a [`BoardContext`]. Mutations are serialized through
//! the board lock and recorded in the activity log, failures included.
//! Read-only commands run without either.

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::log::LogEntry;
use crate::operation::Execute;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Executes operations and keeps the activity log
#[derive(Debug, Clone, Default)]
pub struct KanbanOperationProcessor {
    actor: Option<String>,
}

impl KanbanOperationProcessor {
    /// Processor without actor attribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor that attributes every logged entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute one operation
    pub async fn process<O>(&self, operation: &O, ctx: &BoardContext) -> Result<Value>
    where
        O: Execute<BoardContext, KanbanError> + Serialize,
    {
        let op = operation.op_string();

        if !operation.is_mutation() {
            tracing::debug!(op = %op, "executing read-only operation");
            return operation.execute(ctx).await;
        }

        let _lock = ctx.lock().await?;
        let started = Instant::now();
        let result = operation.execute(ctx).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => tracing::info!(op = %op, duration_ms, "operation completed"),
            Err(e) => tracing::warn!(op = %op, duration_ms, error = %e, "operation failed"),
        }

        let input = serde_json::to_value(operation).unwrap_or(Value::Null);
        let entry = LogEntry::record(op, input, &result, self.actor.clone(), duration_ms);
        if let Err(e) = ctx.append_activity(&entry).await {
            tracing::warn!("Failed to write activity log: {}", e);
        }

        result
    }
}
