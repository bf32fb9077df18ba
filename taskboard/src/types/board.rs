//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::{BoardError, Result};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// A column is a workflow stage holding an ordered list of tasks.
///
/// Task order is display order. The id and title are fixed once the board
/// is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Seed the column with tasks, in display order
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check whether a task sits in this column
    pub fn contains(&self, task: &TaskId) -> bool {
        self.tasks.iter().any(|t| t.id() == task)
    }

    /// Same id and title, new task sequence
    fn with_replaced_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            tasks,
        }
    }
}

/// The whole board: columns in display order, each with its tasks.
///
/// A `Board` is an immutable version. Every mutator takes `&self` and returns
/// the next version; columns the operation does not touch are shared with
/// the previous version rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: IndexMap<ColumnId, Arc<Column>>,
}

impl Board {
    /// Build a board from columns in display order.
    ///
    /// Every task id must appear exactly once across all columns, column ids
    /// must be unique and non-blank, and task names must be non-blank.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let columns: Vec<Column> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let mut column_ids = HashSet::new();
        for column in &columns {
            if column.id.as_str().trim().is_empty() {
                return Err(BoardError::invalid_value(
                    "column id",
                    format!("column '{}' has a blank id", column.title),
                ));
            }
            if !column_ids.insert(column.id.as_str()) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
        }

        // tasks and columns share the drop-target id space
        let mut task_ids = HashSet::new();
        for column in &columns {
            for task in &column.tasks {
                if Task::normalize_name(task.name()).is_none() {
                    return Err(BoardError::invalid_value(
                        "task name",
                        format!("task {} in column {} is blank", task.id(), column.id),
                    ));
                }
                if !task_ids.insert(task.id()) || column_ids.contains(task.id().as_str()) {
                    return Err(BoardError::duplicate_id("task", task.id().as_str()));
                }
            }
        }

        let columns = columns
            .into_iter()
            .map(|c| (c.id.clone(), Arc::new(c)))
            .collect();
        Ok(Self { columns })
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().map(|c| c.as_ref())
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    /// Look up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(|c| c.as_ref())
    }

    pub fn contains_column(&self, id: &ColumnId) -> bool {
        self.columns.contains_key(id)
    }

    /// Resolve the column currently holding a task.
    ///
    /// Scans every column; at most one can match.
    pub fn column_of(&self, task: &TaskId) -> Option<&ColumnId> {
        self.columns
            .values()
            .find(|c| c.contains(task))
            .map(|c| &c.id)
    }

    /// Find a task anywhere on the board
    pub fn find_task(&self, task: &TaskId) -> Option<&Task> {
        self.columns
            .values()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id() == task)
    }

    /// Whether `id` is already used by a task or a column
    pub(crate) fn is_id_taken(&self, id: &TaskId) -> bool {
        self.contains_column(&ColumnId::from(id.as_str())) || self.find_task(id).is_some()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.values().map(|c| c.len()).sum()
    }

    /// Replace one column's task sequence wholesale.
    ///
    /// All other columns are shared with `self`. An unknown column id yields
    /// an unchanged board. Callers are responsible for keeping every task id
    /// in exactly one column.
    pub(crate) fn replace_column_tasks(&self, column: &ColumnId, tasks: Vec<Task>) -> Board {
        let Some(current) = self.columns.get(column) else {
            return self.clone();
        };
        let replaced = Arc::new(current.with_replaced_tasks(tasks));
        let mut columns = self.columns.clone();
        // insert on an existing key keeps its display position
        columns.insert(column.clone(), replaced);
        Board { columns }
    }

    /// Whether two versions share the same allocation for a column
    #[cfg(test)]
    pub(crate) fn shares_column(&self, other: &Board, id: &ColumnId) -> bool {
        match (self.columns.get(id), other.columns.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.columns())
    }
}
