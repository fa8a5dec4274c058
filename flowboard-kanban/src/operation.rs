//! Operation metadata and the `Execute` trait.
//!
//! Operations are structs where the fields ARE the parameters. Each one names
//! itself with a verb and a noun ("add task", "move task") and executes
//! against a context, returning a JSON value.
//!
//! ```ignore
//! operation!(AddTask, verb = "add", noun = "task", description = "Create a new task");
//!
//! #[async_trait]
//! impl Execute<BoardContext, KanbanError> for AddTask {
//!     async fn execute(&self, ctx: &BoardContext) -> Result<Value> { ... }
//! }
//! ```

pub use async_trait::async_trait;
use serde_json::Value;

/// Static description of an operation
pub trait Operation: Send + Sync {
    fn verb(&self) -> &'static str;
    fn noun(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. "move task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }

    /// Mutating operations run under the board lock and are written to the
    /// activity log
    fn is_mutation(&self) -> bool {
        true
    }
}

/// Execute an operation against a context
#[async_trait]
pub trait Execute<C: Sync, E>: Operation {
    async fn execute(&self, ctx: &C) -> Result<Value, E>;
}

/// Implement [`Operation`] for a command struct.
///
/// Append `read_only` for operations that never change the board.
#[macro_export]
macro_rules! operation {
    (@impl $ty:ty, $verb:literal, $noun:literal, $desc:literal, $mutation:literal) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }
            fn noun(&self) -> &'static str {
                $noun
            }
            fn description(&self) -> &'static str {
                $desc
            }
            fn is_mutation(&self) -> bool {
                $mutation
            }
        }
    };
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        $crate::operation!(@impl $ty, $verb, $noun, $desc, true);
    };
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal, read_only) => {
        $crate::operation!(@impl $ty, $verb, $noun, $desc, false);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Peek;
    crate::operation!(Peek, verb = "peek", noun = "board", description = "test peek", read_only);

    struct Poke;
    crate::operation!(Poke, verb = "poke", noun = "task", description = "test poke");

    #[test]
    fn test_operation_macro() {
        assert_eq!(Peek.op_string(), "peek board");
        assert!(!Peek.is_mutation());
        assert_eq!(Poke.op_string(), "poke task");
        assert!(Poke.is_mutation());
        assert_eq!(Poke.description(), "test poke");
    }
}
