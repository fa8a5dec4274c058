//! BoardContext - I/O primitives for board storage
//!
//! The context is a small key-value store on disk, one file per key, rooted at
//! a `.flowboard` directory. It provides access, not logic: commands do all
//! the work.
//!
//! ```text
//! .flowboard/
//! ├── tasks.json          # Task list (JSON array)
//! ├── last_task_number    # Task number counter
//! ├── settings.json       # User settings
//! ├── activity.jsonl      # Operation log, one JSON object per line
//! └── .lock               # Exclusive lock for mutating operations
//! ```
//!
//! Reads are forgiving in the way browser storage is: a corrupt value loads as
//! its default and individually invalid tasks are dropped, with a warning.

use crate::error::{KanbanError, Result};
use crate::log::LogEntry;
use crate::settings::Settings;
use crate::store::BoardState;
use crate::transfer::validate_task_value;
use crate::types::Task;
use fs2::FileExt;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Directory name searched for by [`BoardContext::find`]
pub const BOARD_DIR_NAME: &str = ".flowboard";

/// Context passed to every command - provides access, not logic
#[derive(Debug, Clone)]
pub struct BoardContext {
    /// Path to the .flowboard directory
    root: PathBuf,
}

impl BoardContext {
    /// Create a new context for the given .flowboard directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a context by finding the .flowboard directory from a starting path
    pub fn find(start: impl AsRef<Path>) -> Result<Self> {
        let mut current = start.as_ref().to_path_buf();

        loop {
            let board_dir = current.join(BOARD_DIR_NAME);
            if board_dir.is_dir() {
                return Ok(Self::new(board_dir));
            }

            if !current.pop() {
                return Err(KanbanError::NotInitialized {
                    path: start.as_ref().to_path_buf(),
                });
            }
        }
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.root.join("tasks.json")
    }

    pub fn counter_path(&self) -> PathBuf {
        self.root.join("last_task_number")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    pub fn activity_path(&self) -> PathBuf {
        self.root.join("activity.jsonl")
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Check if the board is initialized
    pub fn is_initialized(&self) -> bool {
        self.tasks_path().exists()
    }

    /// Create the board directory. Idempotent.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(KanbanError::NotInitialized {
                path: self.root.clone(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Task I/O
    // =========================================================================

    /// Read the task list, dropping entries that fail validation
    pub async fn read_tasks(&self) -> Result<Vec<Task>> {
        self.ensure_initialized()?;

        let content = fs::read_to_string(self.tasks_path()).await?;
        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Unable to load tasks, data may be corrupted: {}", e);
                return Ok(Vec::new());
            }
        };

        let Value::Array(entries) = value else {
            tracing::warn!("Loaded tasks is not an array, using an empty board");
            return Ok(Vec::new());
        };

        let mut tasks = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let problems = validate_task_value(&entry);
            if !problems.is_empty() {
                tracing::warn!("Dropping stored task {}: {}", index + 1, problems.join(", "));
                continue;
            }
            match serde_json::from_value::<Task>(entry) {
                Ok(task) => tasks.push(task),
                Err(e) => tracing::warn!("Dropping stored task {}: {}", index + 1, e),
            }
        }
        Ok(tasks)
    }

    /// Write the task list (atomic write via temp file)
    pub async fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        atomic_write(&self.tasks_path(), content.as_bytes()).await
    }

    /// Stored task number counter, `None` when absent or unreadable
    pub async fn read_task_counter(&self) -> Option<u64> {
        let content = fs::read_to_string(self.counter_path()).await.ok()?;
        content.trim().parse().ok()
    }

    pub async fn write_task_counter(&self, value: u64) -> Result<()> {
        atomic_write(&self.counter_path(), value.to_string().as_bytes()).await
    }

    /// Load the whole board. A missing counter is recovered from the tasks
    /// and persisted with the next write.
    pub async fn read_state(&self) -> Result<BoardState> {
        let tasks = self.read_tasks().await?;
        let counter = self.read_task_counter().await;
        Ok(BoardState::from_tasks(tasks, counter))
    }

    /// Persist the whole board
    pub async fn write_state(&self, state: &BoardState) -> Result<()> {
        self.write_tasks(&state.tasks).await?;
        self.write_task_counter(state.last_task_number).await
    }

    // =========================================================================
    // Settings I/O
    // =========================================================================

    /// Read settings, falling back to defaults
    pub async fn read_settings(&self) -> Settings {
        match fs::read_to_string(self.settings_path()).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings: {}", e);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    pub async fn write_settings(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;
        atomic_write(&self.settings_path(), content.as_bytes()).await
    }

    // =========================================================================
    // Activity log
    // =========================================================================

    /// Append an entry to the activity log
    pub async fn append_activity(&self, entry: &LogEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.activity_path())
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Read the activity log, newest first
    pub async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        let path = self.activity_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).await?;
        let mut entries: Vec<LogEntry> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();
        entries.reverse();

        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Try to acquire an exclusive lock (non-blocking)
    pub async fn lock(&self) -> Result<BoardLock> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(BoardLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
pub struct BoardLock {
    file: std::fs::File,
}

impl Drop for BoardLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Write to a temp file in the same directory, then rename over the target
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(BOARD_DIR_NAME));
        ctx.create_directories().await.unwrap();
        ctx.write_tasks(&[]).await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_paths() {
        let ctx = BoardContext::new("/tmp/board/.flowboard");
        assert_eq!(
            ctx.tasks_path(),
            PathBuf::from("/tmp/board/.flowboard/tasks.json")
        );
        assert_eq!(
            ctx.activity_path(),
            PathBuf::from("/tmp/board/.flowboard/activity.jsonl")
        );
    }

    #[tokio::test]
    async fn test_uninitialized_read_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(BOARD_DIR_NAME));
        assert!(matches!(
            ctx.read_tasks().await,
            Err(KanbanError::NotInitialized { .. })
        ));
    }

    #[tokio::test]
    async fn test_state_round_trip() {
        let (_temp, ctx) = setup().await;

        let mut state = BoardState::new();
        state.add_task("First").unwrap();
        state.add_task("Second").unwrap();
        ctx.write_state(&state).await.unwrap();

        let loaded = ctx.read_state().await.unwrap();
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_corrupt_tasks_load_empty() {
        let (_temp, ctx) = setup().await;
        std::fs::write(ctx.tasks_path(), "{not json").unwrap();
        assert!(ctx.read_tasks().await.unwrap().is_empty());

        std::fs::write(ctx.tasks_path(), r#"{"tasks": []}"#).unwrap();
        assert!(ctx.read_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_entries_are_dropped() {
        let (_temp, ctx) = setup().await;
        let content = r#"[
            {"id": "task-1", "taskNumber": "TASK-001", "title": "ok", "status": "todo", "createdAt": 1, "order": 0},
            {"id": "", "title": "no id", "status": "todo", "createdAt": 1, "order": 1},
            {"id": "task-3", "title": "bad status", "status": "blocked", "createdAt": 1, "order": 2}
        ]"#;
        std::fs::write(ctx.tasks_path(), content).unwrap();

        let tasks = ctx.read_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "ok");
    }

    #[tokio::test]
    async fn test_counter_recovered_from_tasks() {
        let (_temp, ctx) = setup().await;
        let content = r#"[
            {"id": "task-1", "taskNumber": "TASK-007", "title": "a", "status": "done", "createdAt": 1, "order": 0}
        ]"#;
        std::fs::write(ctx.tasks_path(), content).unwrap();

        let state = ctx.read_state().await.unwrap();
        assert_eq!(state.last_task_number, 7);
        assert_eq!(ctx.read_task_counter().await, None);
    }

    #[tokio::test]
    async fn test_settings_default_when_missing_or_corrupt() {
        let (_temp, ctx) = setup().await;
        assert_eq!(ctx.read_settings().await, Settings::default());

        std::fs::write(ctx.settings_path(), "][").unwrap();
        assert_eq!(ctx.read_settings().await, Settings::default());
    }

    #[tokio::test]
    async fn test_activity_newest_first() {
        let (_temp, ctx) = setup().await;
        for op in ["add task", "move task"] {
            let entry = LogEntry::record(op, Value::Null, &Ok(Value::Null), None, 0);
            ctx.append_activity(&entry).await.unwrap();
        }
        let entries = ctx.read_activity(None).await.unwrap();
        assert_eq!(entries[0].op, "move task");
        assert_eq!(ctx.read_activity(Some(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_locking() {
        let (_temp, ctx) = setup().await;

        let lock1 = ctx.lock().await.unwrap();
        let result = ctx.lock().await;
        assert!(matches!(result, Err(KanbanError::LockBusy)));

        drop(lock1);
        let _lock2 = ctx.lock().await.unwrap();
    }

    #[tokio::test]
    async fn test_find_walks_up() {
        let (temp, _ctx) = setup().await;
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = BoardContext::find(&nested).unwrap();
        assert_eq!(found.root(), temp.path().join(BOARD_DIR_NAME));
    }
}
