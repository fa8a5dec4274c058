//! Command dispatch: builds the matching operation and runs it through the
//! processor.

use anyhow::{bail, Context, Result};
use flowboard_kanban::board::{ClearTasks, DragTask, GetBoard, GetStats, InitBoard};
use flowboard_kanban::drag::Point;
use flowboard_kanban::filter::StatusFilter;
use flowboard_kanban::task::{
    AddTask, DeleteTask, GetTask, ListTasks, MoveTask, ReorderTask, UpdateTask,
};
use flowboard_kanban::transfer::{ExportFormat, ExportTasks, ImportTasks};
use flowboard_kanban::{BoardContext, KanbanOperationProcessor, BOARD_DIR_NAME};
use serde_json::Value;
use std::path::Path;

use crate::cli::{Cli, Commands};

/// Board named by `--board`, otherwise the nearest one above the current
/// directory. `init` without `--board` always targets the current directory.
fn board_context(board: Option<&Path>, command: &Commands) -> Result<BoardContext> {
    if let Some(board) = board {
        return Ok(BoardContext::new(board));
    }

    let cwd = std::env::current_dir().context("cannot read the current directory")?;
    match command {
        Commands::Init => Ok(BoardContext::new(cwd.join(BOARD_DIR_NAME))),
        _ => Ok(BoardContext::find(&cwd)?),
    }
}

/// Run one parsed command, returning the text to print
pub async fn run(cli: Cli) -> Result<String> {
    let ctx = board_context(cli.board.as_deref(), &cli.command)?;
    let processor = match cli.actor {
        Some(actor) => KanbanOperationProcessor::with_actor(actor),
        None => KanbanOperationProcessor::new(),
    };
    tracing::debug!(board = %ctx.root().display(), "running command");

    let result: Value = match cli.command {
        Commands::Init => processor.process(&InitBoard::new(), &ctx).await?,
        Commands::Board { query, only } => {
            let filter = only.map_or(StatusFilter::All, |c| StatusFilter::Only(c.into()));
            let op = GetBoard::new().with_query(query).with_filter(filter);
            processor.process(&op, &ctx).await?
        }
        Commands::Add { title } => processor.process(&AddTask::new(title), &ctx).await?,
        Commands::List { status, query } => {
            let mut op = ListTasks::new().with_query(query);
            if let Some(status) = status {
                op = op.with_status(status.into());
            }
            processor.process(&op, &ctx).await?
        }
        Commands::Show { id } => processor.process(&GetTask::new(id.as_str()), &ctx).await?,
        Commands::Rename { id, title } => {
            processor
                .process(&UpdateTask::new(id.as_str(), title), &ctx)
                .await?
        }
        Commands::Move { id, column } => {
            processor
                .process(&MoveTask::to_column(id.as_str(), column.into()), &ctx)
                .await?
        }
        Commands::Left { id } => processor.process(&MoveTask::left(id.as_str()), &ctx).await?,
        Commands::Right { id } => processor.process(&MoveTask::right(id.as_str()), &ctx).await?,
        Commands::Reorder { id, index } => {
            processor
                .process(&ReorderTask::new(id.as_str(), index), &ctx)
                .await?
        }
        Commands::Drag { id, path, cancel } => {
            let points = path
                .iter()
                .map(|p| parse_point(p))
                .collect::<Result<Vec<_>>>()?;
            let mut op = DragTask::new(id.as_str(), points);
            if cancel {
                op = op.cancelled();
            }
            processor.process(&op, &ctx).await?
        }
        Commands::Delete { id } => processor.process(&DeleteTask::new(id.as_str()), &ctx).await?,
        Commands::Clear => processor.process(&ClearTasks::new(), &ctx).await?,
        Commands::Stats => processor.process(&GetStats::new(), &ctx).await?,
        Commands::Export { format, output } => {
            let format = ExportFormat::from(format);
            let mut op = ExportTasks::new(format);
            if let Some(path) = output {
                op = op.with_output(path);
            }
            let result = processor.process(&op, &ctx).await?;
            // Raw content prints as-is so it can be redirected into a file
            if let Some(content) = result.get("content").and_then(Value::as_str) {
                return Ok(content.to_string());
            }
            result
        }
        Commands::Import { path } => processor.process(&ImportTasks::new(path), &ctx).await?,
        Commands::Activity { limit } => {
            let entries = ctx
                .read_activity(Some(limit))
                .await
                .context("reading activity log")?;
            serde_json::to_value(entries)?
        }
    };

    Ok(serde_json::to_string_pretty(&result)?)
}

/// Parse `x,y` into a point
fn parse_point(raw: &str) -> Result<Point> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("invalid point '{}', expected x,y", raw);
    };
    let x: f64 = x.trim().parse().with_context(|| format!("invalid x in '{}'", raw))?;
    let y: f64 = y.trim().parse().with_context(|| format!("invalid y in '{}'", raw))?;
    Ok(Point::new(x, y))
}
