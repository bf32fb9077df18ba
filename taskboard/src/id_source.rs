//! Suppliers of fresh task identifiers
//!
//! The board never invents ids itself; `AddTask` asks an [`IdSource`] for
//! one. Uniqueness within the process is the supplier's promise.

use crate::types::TaskId;
use tracing::warn;
use ulid::{Generator, Ulid};

/// Supplies identifiers for new tasks
pub trait IdSource {
    /// Produce an id that has never been handed out before
    fn next_task_id(&mut self) -> TaskId;
}

/// Monotonic ULID supplier.
///
/// Ids generated within the same millisecond still sort in creation order.
pub struct UlidSource {
    generator: Generator,
}

impl UlidSource {
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }
}

impl Default for UlidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UlidSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UlidSource").finish_non_exhaustive()
    }
}

impl IdSource for UlidSource {
    fn next_task_id(&mut self) -> TaskId {
        match self.generator.generate() {
            Ok(id) => id.into(),
            Err(e) => {
                // random bits exhausted within one millisecond
                warn!(error = %e, "monotonic ulid overflow, falling back to random ulid");
                Ulid::new().into()
            }
        }
    }
}

/// Deterministic supplier producing `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("task")
    }
}

impl IdSource for SequentialIds {
    fn next_task_id(&mut self) -> TaskId {
        let id = TaskId::from_string(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl<S: IdSource + ?Sized> IdSource for &mut S {
    fn next_task_id(&mut self) -> TaskId {
        (**self).next_task_id()
    }
}
