//! BoardSession - owner of the current board version
//!
//! Views hold a session, feed it user intents (create a task, drag a card)
//! one at a time, and render whatever [`BoardSession::board`] returns next.
//! Each operation swaps in a whole new board version, so a renderer holding
//! an older snapshot never sees a half-applied move.

use crate::board::AddTask;
use crate::config::{BoardConfig, DEFAULT_ACTIVITY_LIMIT};
use crate::drag::{DragEnd, DragGesture};
use crate::error::Result;
use crate::id_source::{IdSource, UlidSource};
use crate::operation::{Operation, Outcome};
use crate::types::{Board, ColumnId, LogEntry, TaskId};
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Instant;
use serde::Serialize;
use tracing::{debug, warn};

/// Holds the single current board version plus the id supplier and gesture
/// state that feed it.
pub struct BoardSession<S = UlidSource> {
    board: Board,
    ids: S,
    gesture: DragGesture,
    activity: VecDeque<LogEntry>,
    activity_limit: usize,
    actor: Option<String>,
}

impl BoardSession<UlidSource> {
    /// Open a session on the board described by `config`, with ULID task ids
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Self::from_config_with_ids(config, UlidSource::new())
    }
}

impl<S: IdSource> BoardSession<S> {
    pub fn new(board: Board, ids: S) -> Self {
        Self {
            board,
            ids,
            gesture: DragGesture::new(),
            activity: VecDeque::new(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            actor: None,
        }
    }

    pub fn from_config_with_ids(config: &BoardConfig, mut ids: S) -> Result<Self> {
        let board = Board::from_config(config, &mut ids)?;
        Ok(Self::new(board, ids).with_activity_limit(config.activity_limit))
    }

    /// Attribute logged operations to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self.activity.truncate(limit);
        self
    }

    /// The current board version
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An owned copy of the current version, cheap to hand to a renderer
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Applied operations, newest first
    pub fn activity(&self) -> impl ExactSizeIterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Apply one operation to the current version.
    ///
    /// Applied changes replace the current board and are recorded in the
    /// activity log. Skipped operations keep the current version as-is.
    pub fn process<O: Operation>(&mut self, op: &O) -> Outcome {
        let started = Instant::now();
        let transition = op.apply(&self.board, &mut self.ids);

        if let Outcome::Applied(change) = &transition.outcome {
            self.board = transition.board;
            let op_string = op.op_string();
            let elapsed = started.elapsed();
            debug!(op = %op_string, ?elapsed, "operation applied");

            let input = log_value(&op_string, "input", op);
            let output = log_value(&op_string, "output", change);
            let mut entry = LogEntry::new(op_string, input, output).with_elapsed(elapsed);
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            self.record(entry);
        }
        transition.outcome
    }

    /// Create a task from a raw name typed into `column`'s form
    pub fn create_task(&mut self, column: impl Into<ColumnId>, raw_name: &str) -> &Board {
        self.process(&AddTask::new(column, raw_name));
        &self.board
    }

    /// Reconcile a completed drag of `active` released over `over`
    pub fn reconcile_drag(&mut self, active: impl Into<TaskId>, over: Option<ColumnId>) -> &Board {
        self.process(&DragEnd::new(active, over));
        &self.board
    }

    /// A drag started on `task`
    pub fn begin_drag(&mut self, task: impl Into<TaskId>) {
        self.gesture.start(task);
    }

    /// The drag was aborted before release
    pub fn cancel_drag(&mut self) {
        if let Some(task) = self.gesture.cancel() {
            debug!(task = %task, "drag cancelled");
        }
    }

    /// The dragged task was released over `over`.
    ///
    /// Returns `None` when no drag was in flight.
    pub fn release_drag(&mut self, over: Option<ColumnId>) -> Option<Outcome> {
        let event = self.gesture.release(over)?;
        Some(self.process(&event))
    }

    fn record(&mut self, entry: LogEntry) {
        if self.activity_limit == 0 {
            return;
        }
        self.activity.push_front(entry);
        self.activity.truncate(self.activity_limit);
    }
}

/// Serialize one side of a log entry, falling back to null
fn log_value(op: &str, side: &str, value: &impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!(op, side, error = %e, "activity log value not serializable, recording null");
        Value::Null
    })
}
