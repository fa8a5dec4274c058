//! Export and import of board data
//!
//! JSON exports wrap the task list in a versioned envelope and can be
//! imported back. CSV is export only.

mod csv;
mod export;
mod import;

pub use self::csv::{to_csv, CSV_HEADER};
pub use export::{ExportEnvelope, ExportFormat, ExportTasks, EXPORT_VERSION};
pub use import::{import_json, parse_import, validate_task_value, ImportReport, ImportTasks};
