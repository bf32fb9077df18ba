//! Drag gesture tracking
//!
//! `Idle -> Dragging -> Idle`. Releasing a drag produces the [`DragEnd`]
//! event that reconciliation consumes; cancelling produces nothing.

use super::reconcile::DragEnd;
use crate::types::{ColumnId, TaskId};
use tracing::trace;

/// Where a gesture currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        active: TaskId,
    },
}

/// Tracks at most one in-flight drag
#[derive(Debug, Default)]
pub struct DragGesture {
    phase: DragPhase,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The task being dragged, if any
    pub fn active(&self) -> Option<&TaskId> {
        match &self.phase {
            DragPhase::Dragging { active } => Some(active),
            DragPhase::Idle => None,
        }
    }

    /// Pick up a task. A drag already in flight is abandoned.
    pub fn start(&mut self, task: impl Into<TaskId>) {
        let task = task.into();
        if let DragPhase::Dragging { active } = &self.phase {
            trace!(abandoned = %active, task = %task, "drag restarted");
        }
        self.phase = DragPhase::Dragging { active: task };
    }

    /// Abandon the current drag, returning the task that was being dragged
    pub fn cancel(&mut self) -> Option<TaskId> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { active } => Some(active),
            DragPhase::Idle => None,
        }
    }

    /// Drop the dragged task over `over`.
    ///
    /// Returns `None` when no drag was in flight.
    pub fn release(&mut self, over: Option<ColumnId>) -> Option<DragEnd> {
        self.cancel().map(|active| DragEnd { active, over })
    }
}
