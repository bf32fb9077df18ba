//! In-memory kanban board with drag-and-drop reconciliation
//!
//! This crate holds the state model behind a single-page task board: a fixed
//! set of columns, each with an ordered list of tasks. It renders nothing and
//! captures no input. A view layer reports "task T was released over column
//! C" and renders the board version that comes back.
//!
//! ## Overview
//!
//! - **Versions, not mutation** - every operation takes a [`Board`] and
//!   returns the next one; untouched columns are shared between versions
//! - **No-ops, not errors** - blank names, unknown columns, stale task ids
//!   and drops onto the task's own column return the board unchanged
//! - **Append on move** - a moved task always lands at the end of its new
//!   column; there is no reordering within a column
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{BoardConfig, BoardSession, ColumnId};
//!
//! # fn example() -> taskboard::Result<()> {
//! let mut session = BoardSession::from_config(&BoardConfig::default())?;
//!
//! // A form submission in the "To Do" column
//! session.create_task("column1", "  Write tests ");
//!
//! // The new card is dragged into "Done"
//! let card = session.board().column(&ColumnId::from("column1")).unwrap()
//!     .tasks().last().unwrap().id().clone();
//! session.begin_drag(card);
//! session.release_drag(Some(ColumnId::from("column3")));
//!
//! assert_eq!(
//!     session.board().column(&ColumnId::from("column3")).unwrap()
//!         .tasks().last().unwrap().name(),
//!     "Write tests"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod board;
pub mod config;
pub mod drag;
mod error;
pub mod id_source;
pub mod operation;
mod session;
pub mod types;

pub use board::AddTask;
pub use config::{BoardConfig, ColumnConfig};
pub use drag::{DragEnd, DragGesture, DragPhase};
pub use error::{BoardError, Result};
pub use id_source::{IdSource, SequentialIds, UlidSource};
pub use operation::{Change, Operation, Outcome, Skip, Transition};
pub use session::BoardSession;

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, LogEntry, LogEntryId, Task, TaskId};
