//! Drag-release reconciliation

use crate::id_source::IdSource;
use crate::operation::{Change, Operation, Skip, Transition};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A completed drag gesture: the dragged task and the container it was
/// released over.
///
/// Columns are the only drop targets, so `over` is a column id. `None` means
/// the task was released outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    /// The dragged task
    pub active: TaskId,
    /// Drop target under the pointer at release
    #[serde(default)]
    pub over: Option<ColumnId>,
}

impl DragEnd {
    pub fn new(active: impl Into<TaskId>, over: Option<ColumnId>) -> Self {
        Self {
            active: active.into(),
            over,
        }
    }

    /// Released over a column
    pub fn over(active: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::new(active, Some(column.into()))
    }

    /// Released outside any drop zone
    pub fn cancelled(active: impl Into<TaskId>) -> Self {
        Self::new(active, None)
    }

    /// Compute the board after this drag.
    ///
    /// A move removes the task from its column and appends it to the end of
    /// the target column in a single new version. Everything else returns the
    /// board unchanged, with the reason in the outcome.
    pub fn reconcile(&self, board: &Board) -> Transition {
        let Some(over) = &self.over else {
            return self.skip(board, Skip::Cancelled);
        };
        if over.as_str() == self.active.as_str() {
            return self.skip(board, Skip::NoMovement);
        }

        let located = board.columns().find_map(|column| {
            column
                .tasks()
                .iter()
                .position(|t| t.id() == &self.active)
                .map(|index| (column, index))
        });
        let Some((source, index)) = located else {
            return self.skip(
                board,
                Skip::StaleTask {
                    task: self.active.clone(),
                },
            );
        };

        let Some(target) = board.column(over) else {
            return self.skip(board, Skip::UnknownColumn { column: over.clone() });
        };
        if source.id() == target.id() {
            return self.skip(
                board,
                Skip::SameColumn {
                    column: source.id().clone(),
                },
            );
        }

        let mut remaining = source.tasks().to_vec();
        let moved = remaining.remove(index);
        let mut appended = target.tasks().to_vec();
        appended.push(moved);

        let from = source.id().clone();
        let to = target.id().clone();
        // both replacements land in one returned version
        let next = board
            .replace_column_tasks(&from, remaining)
            .replace_column_tasks(&to, appended);

        debug!(task = %self.active, from = %from, to = %to, "task moved");
        Transition::applied(
            next,
            Change::TaskMoved {
                task: self.active.clone(),
                from,
                to,
            },
        )
    }

    fn skip(&self, board: &Board, skip: Skip) -> Transition {
        debug!(task = %self.active, %skip, "drag ignored");
        Transition::unchanged(board, skip)
    }
}

impl Operation for DragEnd {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn apply(&self, board: &Board, _ids: &mut dyn IdSource) -> Transition {
        self.reconcile(board)
    }
}

impl Board {
    /// Apply a drag release of `dragged` over `over`.
    ///
    /// Returns the next board version, or an equal board when the gesture
    /// does not move anything.
    pub fn on_drag_end(&self, dragged: &TaskId, over: Option<&ColumnId>) -> Board {
        DragEnd::new(dragged.clone(), over.cloned())
            .reconcile(self)
            .into_board()
    }
}
