//! Board settings stored next to the tasks

use crate::drag::DEFAULT_DRAG_THRESHOLD;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User preferences. Unknown or missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub show_completed_tasks: bool,
    /// Pixels a press must move before a drag starts
    pub drag_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_completed_tasks: true,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}
