//! Board layout configuration
//!
//! A board's columns are fixed for its lifetime, so they are described up
//! front, optionally with seed tasks:
//!
//! ```yaml
//! name: Kanban
//! activity_limit: 100
//! columns:
//!   - id: column1
//!     title: To Do
//!     tasks: [Learn React, Build Kanban Board]
//!   - id: column2
//!     title: In Progress
//! ```

use crate::error::{BoardError, Result};
use crate::id_source::SequentialIds;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BOARD_NAME: &str = "Kanban";
pub(crate) const DEFAULT_ACTIVITY_LIMIT: usize = 100;

/// Initial layout of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Maximum number of activity log entries kept by a session
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,

    /// Columns in display order
    pub columns: Vec<ColumnConfig>,
}

/// One column of the initial layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub title: String,
    /// Seed task names, in display order
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl ColumnConfig {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks.extend(tasks.into_iter().map(Into::into));
        self
    }
}

fn default_name() -> String {
    DEFAULT_BOARD_NAME.to_string()
}

fn default_activity_limit() -> usize {
    DEFAULT_ACTIVITY_LIMIT
}

impl BoardConfig {
    /// Parse and validate a YAML layout
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Check the layout would build a valid board
    pub fn validate(&self) -> Result<()> {
        Board::from_config(self, &mut SequentialIds::default()).map(|_| ())
    }
}

impl Default for BoardConfig {
    /// Three-stage board with a few starter tasks
    fn default() -> Self {
        Self {
            name: default_name(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            columns: vec![
                ColumnConfig::new("column1", "To Do")
                    .with_tasks(["Learn React", "Build Kanban Board"]),
                ColumnConfig::new("column2", "In Progress").with_tasks(["Implement Drag and Drop"]),
                ColumnConfig::new("column3", "Done").with_tasks(["Set up Vite"]),
            ],
        }
    }
}
