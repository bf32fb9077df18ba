//! Activity log entries kept by a session

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// One applied operation as it appears in a session's activity log.
///
/// `input` is the serialized command and `output` the serialized change, so
/// an entry can be rendered or shipped without knowing the concrete command.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub timestamp: DateTime<Utc>,
    /// "verb noun", e.g. "move task"
    pub op: String,
    pub input: Value,
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub duration_ms: u64,
}

impl LogEntry {
    /// Stamp an entry for `op` at the current time
    pub fn new(op: impl Into<String>, input: Value, output: Value) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor: None,
            duration_ms: 0,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Record how long the operation ran, saturating at `u64::MAX` ms
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
