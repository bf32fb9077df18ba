//! Operations and the transitions they produce
//!
//! An operation is a struct whose fields are its parameters. Applying it to a
//! board version never mutates that version; it yields a [`Transition`]
//! carrying the next version and what happened.

use crate::id_source::IdSource;
use crate::types::{Board, ColumnId, Task, TaskId};
use serde::Serialize;
use std::fmt;

/// A state-changing command against a board
pub trait Operation: Serialize + fmt::Debug {
    /// Action word, e.g. "add"
    fn verb(&self) -> &'static str;

    /// Target entity, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Canonical op string used in the activity log
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }

    /// Compute the next board version
    fn apply(&self, board: &Board, ids: &mut dyn IdSource) -> Transition;
}

/// What an applied operation changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    TaskAdded { task: Task, column: ColumnId },
    TaskMoved { task: TaskId, from: ColumnId, to: ColumnId },
}

/// Why an operation left the board unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Skip {
    /// Task name was empty after trimming
    BlankName,
    /// The named column is not on the board
    UnknownColumn { column: ColumnId },
    /// Drag released outside any drop zone
    Cancelled,
    /// Drag released over the dragged task itself
    NoMovement,
    /// Dragged task is on no column
    StaleTask { task: TaskId },
    /// Drag released over the column the task already sits in
    SameColumn { column: ColumnId },
    /// The id supplier kept returning ids already on the board
    IdExhausted { last: TaskId },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "task name is blank"),
            Self::UnknownColumn { column } => write!(f, "no column '{column}'"),
            Self::Cancelled => write!(f, "drag released outside any column"),
            Self::NoMovement => write!(f, "drag released over itself"),
            Self::StaleTask { task } => write!(f, "task '{task}' is not on the board"),
            Self::SameColumn { column } => write!(f, "task already in column '{column}'"),
            Self::IdExhausted { last } => write!(f, "no unused task id, last drawn '{last}'"),
        }
    }
}

/// Result of applying one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Change),
    Unchanged(Skip),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn change(&self) -> Option<&Change> {
        match self {
            Self::Applied(change) => Some(change),
            Self::Unchanged(_) => None,
        }
    }

    pub fn skip(&self) -> Option<&Skip> {
        match self {
            Self::Applied(_) => None,
            Self::Unchanged(skip) => Some(skip),
        }
    }
}

/// The next board version together with the outcome that produced it
#[derive(Debug, Clone)]
pub struct Transition {
    pub board: Board,
    pub outcome: Outcome,
}

impl Transition {
    pub fn applied(board: Board, change: Change) -> Self {
        Self {
            board,
            outcome: Outcome::Applied(change),
        }
    }

    /// Keep the current version as-is
    pub fn unchanged(board: &Board, skip: Skip) -> Self {
        Self {
            board: board.clone(),
            outcome: Outcome::Unchanged(skip),
        }
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}
