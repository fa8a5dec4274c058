//! Integration tests for activity logging

use flowboard_kanban::{
    board::{GetBoard, GetStats, InitBoard},
    task::{AddTask, GetTask, ListTasks, UpdateTask},
    BoardContext, KanbanOperationProcessor,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_activity_logging_end_to_end() {
    let temp = TempDir::new().unwrap();
    let ctx = BoardContext::new(temp.path().join(".flowboard"));

    let processor = KanbanOperationProcessor::with_actor("test-user[session123]");

    processor.process(&InitBoard::new(), &ctx).await.unwrap();

    let result = processor
        .process(&AddTask::new("First task"), &ctx)
        .await
        .unwrap();
    let task_id = result["id"].as_str().unwrap().to_string();

    processor
        .process(&UpdateTask::new(task_id.as_str(), "Updated task"), &ctx)
        .await
        .unwrap();

    // Read-only, not logged
    processor
        .process(&GetTask::new(task_id.as_str()), &ctx)
        .await
        .unwrap();

    let entries = ctx.read_activity(None).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].op, "update task"); // Newest first
    assert_eq!(entries[1].op, "add task");
    assert_eq!(entries[2].op, "init board");

    for entry in &entries {
        assert_eq!(entry.actor.as_deref(), Some("test-user[session123]"));
    }
    assert_eq!(entries[0].input["title"], "Updated task");
    assert_eq!(entries[1].output["taskNumber"], "TASK-001");
}

#[tokio::test]
async fn test_read_only_operations_dont_log() {
    let temp = TempDir::new().unwrap();
    let ctx = BoardContext::new(temp.path().join(".flowboard"));
    let processor = KanbanOperationProcessor::new();

    processor.process(&InitBoard::new(), &ctx).await.unwrap();
    processor.process(&AddTask::new("Task"), &ctx).await.unwrap();
    assert_eq!(ctx.read_activity(None).await.unwrap().len(), 2);

    processor.process(&ListTasks::new(), &ctx).await.unwrap();
    processor.process(&GetBoard::new(), &ctx).await.unwrap();
    processor.process(&GetStats::new(), &ctx).await.unwrap();

    let entries = ctx.read_activity(None).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.actor.is_none()));
}

#[tokio::test]
async fn test_error_logging() {
    let temp = TempDir::new().unwrap();
    let ctx = BoardContext::new(temp.path().join(".flowboard"));
    let processor = KanbanOperationProcessor::new();

    processor.process(&InitBoard::new(), &ctx).await.unwrap();

    let result = processor
        .process(&UpdateTask::new("nonexistent", "Updated"), &ctx)
        .await;
    assert!(result.is_err());

    let entries = ctx.read_activity(None).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].op, "update task");
    assert!(entries[0].error().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_mutation_fails_fast_when_locked() {
    let temp = TempDir::new().unwrap();
    let ctx = BoardContext::new(temp.path().join(".flowboard"));
    let processor = KanbanOperationProcessor::new();
    processor.process(&InitBoard::new(), &ctx).await.unwrap();

    let _held = ctx.lock().await.unwrap();
    let result = processor.process(&AddTask::new("Blocked"), &ctx).await;
    assert!(matches!(
        result,
        Err(flowboard_kanban::KanbanError::LockBusy)
    ));

    // Reads still work while the lock is held
    processor.process(&ListTasks::new(), &ctx).await.unwrap();
}
