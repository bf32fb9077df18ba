//! Board initialization from a layout config

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::id_source::IdSource;
use crate::types::{Board, Column, Task};
use tracing::debug;

impl Board {
    /// Build the initial board described by `config`.
    ///
    /// Seed task names are trimmed and each seed task draws a fresh id from
    /// `ids`.
    pub fn from_config(config: &BoardConfig, ids: &mut dyn IdSource) -> Result<Board> {
        let mut columns = Vec::with_capacity(config.columns.len());
        for column in &config.columns {
            let mut tasks = Vec::with_capacity(column.tasks.len());
            for raw in &column.tasks {
                let name = Task::normalize_name(raw).ok_or_else(|| {
                    BoardError::invalid_value(
                        "task name",
                        format!("seed task in column {} is blank", column.id),
                    )
                })?;
                tasks.push(Task::new(ids.next_task_id(), name));
            }
            columns.push(Column::new(column.id.clone(), column.title.clone()).with_tasks(tasks));
        }

        let board = Board::from_columns(columns)?;
        debug!(
            name = %config.name,
            columns = board.column_ids().count(),
            tasks = board.task_count(),
            "board initialized"
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnConfig;
    use crate::id_source::SequentialIds;

    #[test]
    fn test_init_default_board() {
        let board =
            Board::from_config(&BoardConfig::default(), &mut SequentialIds::default()).unwrap();

        let titles: Vec<&str> = board.columns().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(board.task_count(), 4);

        let todo = board.column(&"column1".into()).unwrap();
        assert_eq!(todo.tasks()[0].name(), "Learn React");
        assert_eq!(todo.tasks()[0].id().as_str(), "task-1");
        assert_eq!(todo.tasks()[1].id().as_str(), "task-2");
    }

    #[test]
    fn test_init_trims_seed_names() {
        let config = BoardConfig {
            columns: vec![ColumnConfig::new("a", "A").with_tasks([" padded "])],
            ..BoardConfig::default()
        };
        let board = Board::from_config(&config, &mut SequentialIds::default()).unwrap();
        assert_eq!(board.column(&"a".into()).unwrap().tasks()[0].name(), "padded");
    }

    #[test]
    fn test_init_rejects_blank_column_id() {
        let config = BoardConfig {
            columns: vec![ColumnConfig::new(" ", "Nameless")],
            ..BoardConfig::default()
        };
        let err = Board::from_config(&config, &mut SequentialIds::default()).unwrap_err();
        assert!(matches!(err, BoardError::InvalidValue { .. }));
    }
}
