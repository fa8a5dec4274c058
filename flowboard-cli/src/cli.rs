//! CLI definition for the FlowBoard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flowboard_kanban::transfer::ExportFormat;
use flowboard_kanban::Status;

/// Column names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    Todo,
    InProgress,
    Done,
}

impl From<ColumnArg> for Status {
    fn from(column: ColumnArg) -> Self {
        match column {
            ColumnArg::Todo => Status::Todo,
            ColumnArg::InProgress => Status::InProgress,
            ColumnArg::Done => Status::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// FlowBoard - a three-column kanban board
#[derive(Parser, Debug)]
#[command(name = "flowboard")]
#[command(version)]
#[command(about = "FlowBoard - kanban board with drag-and-drop ordering")]
pub struct Cli {
    /// Board directory. When omitted, the nearest `.flowboard` in the current
    /// directory or one of its parents is used (`init` creates one here).
    #[arg(long, global = true, env = "FLOWBOARD_DIR")]
    pub board: Option<PathBuf>,

    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Attribute logged operations to this actor
    #[arg(long, global = true)]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty board
    Init,
    /// Show the board column by column
    Board {
        /// Search titles and task numbers
        #[arg(short, long, default_value = "")]
        query: String,
        /// Only show tasks of this column
        #[arg(long, value_enum)]
        only: Option<ColumnArg>,
    },
    /// Add a task to To Do
    Add {
        title: String,
    },
    /// List tasks
    List {
        #[arg(long, value_enum)]
        status: Option<ColumnArg>,
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one task
    Show {
        id: String,
    },
    /// Rename a task
    Rename {
        id: String,
        title: String,
    },
    /// Move a task to another column (it lands at the bottom)
    Move {
        id: String,
        #[arg(value_enum)]
        column: ColumnArg,
    },
    /// Move a task one column to the left
    Left {
        id: String,
    },
    /// Move a task one column to the right
    Right {
        id: String,
    },
    /// Move a task within its column
    Reorder {
        id: String,
        /// Slot among the other cards of the column, 0 is the top
        index: usize,
    },
    /// Drag a task along pointer positions, e.g. `50,40 650,10`
    Drag {
        id: String,
        /// Pointer positions as x,y; the first is the press
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        path: Vec<String>,
        /// Abort the gesture instead of dropping
        #[arg(long)]
        cancel: bool,
    },
    /// Delete a task
    Delete {
        id: String,
    },
    /// Delete every task
    Clear,
    /// Show task counts and dates
    Stats,
    /// Export all tasks
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Output file; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Merge tasks from a JSON export
    Import {
        path: PathBuf,
    },
    /// Show the most recent logged operations
    Activity {
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}
