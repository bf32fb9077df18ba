//! AddTask command

use crate::id_source::IdSource;
use crate::operation::{Change, Operation, Skip, Transition};
use crate::types::{Board, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Append a new task to the end of a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// The column receiving the task
    pub column: ColumnId,
    /// Raw name as typed; surrounding whitespace is dropped
    pub name: String,
}

impl AddTask {
    pub fn new(column: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            name: name.into(),
        }
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn apply(&self, board: &Board, ids: &mut dyn IdSource) -> Transition {
        let Some(column) = board.column(&self.column) else {
            let skip = Skip::UnknownColumn {
                column: self.column.clone(),
            };
            debug!(column = %self.column, %skip, "add task skipped");
            return Transition::unchanged(board, skip);
        };

        let Some(name) = Task::normalize_name(&self.name) else {
            debug!(column = %self.column, skip = %Skip::BlankName, "add task skipped");
            return Transition::unchanged(board, Skip::BlankName);
        };

        let id = match draw_unused_id(board, ids) {
            Ok(id) => id,
            Err(last) => {
                let skip = Skip::IdExhausted { last };
                warn!(column = %self.column, %skip, "add task skipped");
                return Transition::unchanged(board, skip);
            }
        };
        let task = Task::new(id, name);
        let mut tasks = column.tasks().to_vec();
        tasks.push(task.clone());
        let next = board.replace_column_tasks(&self.column, tasks);

        debug!(task = %task.id(), column = %self.column, "task added");
        Transition::applied(
            next,
            Change::TaskAdded {
                task,
                column: self.column.clone(),
            },
        )
    }
}

/// Draw ids until one is not already used on the board.
///
/// Every taken id is skipped at most once, so a supplier that keeps
/// returning taken ids gives up after `taken + 1` draws and reports the last.
fn draw_unused_id(board: &Board, ids: &mut dyn IdSource) -> Result<TaskId, TaskId> {
    let taken = board.task_count() + board.column_ids().count();
    let mut id = ids.next_task_id();
    for _ in 0..taken {
        if !board.is_id_taken(&id) {
            return Ok(id);
        }
        debug!(task = %id, "drawn id already on the board, drawing again");
        id = ids.next_task_id();
    }
    if board.is_id_taken(&id) {
        Err(id)
    } else {
        Ok(id)
    }
}

impl Board {
    /// Create a task in `column` from a raw name.
    ///
    /// Unknown columns and blank names leave the board unchanged.
    pub fn add_task(&self, column: &ColumnId, raw_name: &str, ids: &mut dyn IdSource) -> Board {
        AddTask::new(column.clone(), raw_name)
            .apply(self, ids)
            .into_board()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::id_source::SequentialIds;
    use crate::types::Column;

    fn setup() -> Board {
        Board::from_columns([
            Column::new("column1", "To Do").with_tasks([Task::new("x", "X")]),
            Column::new("column2", "Done"),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_task_appends_trimmed_name() {
        let board = setup();
        let mut ids = SequentialIds::default();

        let result = AddTask::new("column1", "  Write tests ").apply(&board, &mut ids);

        let column = result.board.column(&"column1".into()).unwrap();
        let names: Vec<&str> = column.tasks().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["X", "Write tests"]);
        assert_eq!(column.tasks()[1].id().as_str(), "task-1");
        assert!(result.outcome.is_applied());
    }

    #[test]
    fn test_add_task_leaves_other_columns_shared() {
        let board = setup();
        let next = board.add_task(&"column1".into(), "New", &mut SequentialIds::default());
        assert!(next.shares_column(&board, &"column2".into()));
        assert!(!next.shares_column(&board, &"column1".into()));
    }

    #[test]
    fn test_add_task_blank_name_is_noop() {
        let board = setup();
        let mut ids = SequentialIds::default();

        let result = AddTask::new("column1", "   ").apply(&board, &mut ids);

        assert_eq!(result.board, board);
        assert_eq!(result.outcome.skip(), Some(&Skip::BlankName));
        // no id consumed for a rejected task
        assert_eq!(ids.next_task_id().as_str(), "task-1");
    }

    #[test]
    fn test_add_task_unknown_column_is_noop() {
        let board = setup();
        let result =
            AddTask::new("column9", "Lost").apply(&board, &mut SequentialIds::default());

        assert_eq!(result.board, board);
        assert!(matches!(
            result.outcome.skip(),
            Some(Skip::UnknownColumn { column }) if column.as_str() == "column9"
        ));
    }

    #[test]
    fn test_add_task_skips_ids_already_on_board() {
        // seeded with task-1..task-4 by a supplier that has since been replaced
        let board = Board::from_config(&BoardConfig::default(), &mut SequentialIds::default())
            .unwrap();
        let mut ids = SequentialIds::default();

        let result = AddTask::new("column3", "Another").apply(&board, &mut ids);

        let Some(Change::TaskAdded { task, .. }) = result.outcome.change() else {
            panic!("expected a task to be added");
        };
        assert_eq!(task.id().as_str(), "task-5");
        let all: Vec<&str> = result
            .board
            .columns()
            .flat_map(|c| c.tasks())
            .map(|t| t.id().as_str())
            .collect();
        assert_eq!(all.iter().filter(|id| **id == "task-1").count(), 1);
        assert_eq!(result.board.task_count(), 5);
    }

    #[test]
    fn test_add_task_never_reuses_a_column_id() {
        let board =
            Board::from_columns([Column::new("task-1", "A"), Column::new("task-2", "B")]).unwrap();

        let next = board.add_task(&"task-2".into(), "Fresh", &mut SequentialIds::default());

        let added = &next.column(&"task-2".into()).unwrap().tasks()[0];
        assert_eq!(added.id().as_str(), "task-3");
    }

    #[test]
    fn test_add_task_gives_up_on_a_stuck_supplier() {
        struct Stuck;
        impl IdSource for Stuck {
            fn next_task_id(&mut self) -> TaskId {
                "x".into()
            }
        }

        let board = setup();
        let result = AddTask::new("column2", "Doomed").apply(&board, &mut Stuck);

        assert_eq!(result.board, board);
        assert_eq!(
            result.outcome.skip(),
            Some(&Skip::IdExhausted { last: "x".into() })
        );
    }

    #[test]
    fn test_op_string() {
        assert_eq!(AddTask::new("c", "n").op_string(), "add task");
    }
}
