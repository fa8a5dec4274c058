//! Identifier newtypes for tasks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, immutable task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id (`task-` prefixed ULID)
    pub fn new() -> Self {
        Self(format!("task-{}", ulid::Ulid::new().to_string().to_lowercase()))
    }

    /// Wrap an existing id string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&TaskId> for TaskId {
    fn from(id: &TaskId) -> Self {
        id.clone()
    }
}

/// Human-facing sequential task number, e.g. `TASK-007`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskNumber(String);

impl TaskNumber {
    const PREFIX: &'static str = "TASK-";

    /// Build the number for the given sequence value, zero padded to three digits
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, n))
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The numeric part, if this number follows the `TASK-NNN` shape
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("task-"));
    }

    #[test]
    fn test_task_number_padding() {
        assert_eq!(TaskNumber::from_sequence(7).as_str(), "TASK-007");
        assert_eq!(TaskNumber::from_sequence(1234).as_str(), "TASK-1234");
    }

    #[test]
    fn test_task_number_sequence() {
        assert_eq!(TaskNumber::from_string("TASK-042").sequence(), Some(42));
        assert_eq!(TaskNumber::from_string("BUG-1").sequence(), None);
        assert_eq!(TaskNumber::default().sequence(), None);
    }
}
