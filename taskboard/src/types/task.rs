//! Task card type

use super::ids::TaskId;
use serde::{Deserialize, Serialize};

/// A task card on the board.
///
/// Content is fixed at creation: there is no rename. Moving a task between
/// columns carries the same value over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
}

impl Task {
    /// Create a task with the given id and name
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The task's identifier
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// The task's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalize a raw task name as typed by a user.
    ///
    /// Returns `None` when nothing but whitespace remains.
    pub fn normalize_name(raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
