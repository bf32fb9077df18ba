//! Property-based tests for board invariants

use proptest::prelude::*;
use std::collections::HashSet;
use taskboard::{
    AddTask, Board, BoardConfig, BoardSession, Change, Column, ColumnId, DragEnd, Outcome,
    SequentialIds, Task, TaskId,
};

#[derive(Debug, Clone)]
enum Step {
    Add { column: usize, name: String },
    Drag { task: usize, over: Option<usize> },
    DragStale { over: usize },
}

/// Index 3 names a column that does not exist
fn column_id(index: usize) -> ColumnId {
    ColumnId::from_string(format!("column{}", index + 1))
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..4usize, "[ a-z]{0,6}").prop_map(|(column, name)| Step::Add { column, name }),
        5 => (any::<usize>(), prop::option::of(0..4usize))
            .prop_map(|(task, over)| Step::Drag { task, over }),
        1 => (0..4usize).prop_map(|over| Step::DragStale { over }),
    ]
}

fn all_ids(board: &Board) -> Vec<TaskId> {
    board
        .columns()
        .flat_map(|c| c.tasks().iter().map(|t| t.id().clone()))
        .collect()
}

fn column_board(a: &[Task], b: &[Task]) -> Board {
    Board::from_columns([
        Column::new("a", "A").with_tasks(a.iter().cloned()),
        Column::new("b", "B").with_tasks(b.iter().cloned()),
    ])
    .unwrap()
}

fn tasks(prefix: &str, len: usize) -> Vec<Task> {
    (0..len)
        .map(|i| Task::new(format!("{prefix}-{i}"), format!("{prefix} {i}")))
        .collect()
}

proptest! {
    #[test]
    fn test_every_task_in_exactly_one_column(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let mut session = BoardSession::from_config_with_ids(
            &BoardConfig::default(),
            SequentialIds::default(),
        )
        .unwrap();
        let mut expected: HashSet<TaskId> = all_ids(session.board()).into_iter().collect();

        for step in steps {
            let outcome = match step {
                Step::Add { column, name } => session.process(&AddTask::new(column_id(column), name)),
                Step::Drag { task, over } => {
                    let ids = all_ids(session.board());
                    let active = ids[task % ids.len()].clone();
                    session.process(&DragEnd::new(active, over.map(column_id)))
                }
                Step::DragStale { over } => {
                    session.process(&DragEnd::over("ghost", column_id(over)))
                }
            };
            if let Outcome::Applied(Change::TaskAdded { task, .. }) = &outcome {
                prop_assert!(expected.insert(task.id().clone()));
            }

            let ids = all_ids(session.board());
            let unique: HashSet<TaskId> = ids.iter().cloned().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(&unique, &expected);
            prop_assert_eq!(session.board().column_ids().count(), 3);
        }
    }

    #[test]
    fn test_move_preserves_relative_order(
        a_len in 1..10usize,
        b_len in 0..10usize,
        pick in any::<usize>(),
    ) {
        let a = tasks("a", a_len);
        let b = tasks("b", b_len);
        let board = column_board(&a, &b);
        let index = pick % a_len;

        let next = board.on_drag_end(a[index].id(), Some(&ColumnId::from("b")));

        let mut expected_a = a.clone();
        let moved = expected_a.remove(index);
        let mut expected_b = b.clone();
        expected_b.push(moved);

        prop_assert_eq!(next.column(&"a".into()).unwrap().tasks(), expected_a.as_slice());
        prop_assert_eq!(next.column(&"b".into()).unwrap().tasks(), expected_b.as_slice());
    }

    #[test]
    fn test_self_drop_is_identity(
        a_len in 1..10usize,
        b_len in 0..10usize,
        pick in any::<usize>(),
    ) {
        let board = column_board(&tasks("a", a_len), &tasks("b", b_len));
        let ids = all_ids(&board);
        let task = &ids[pick % ids.len()];
        let own = board.column_of(task).unwrap().clone();

        prop_assert_eq!(board.on_drag_end(task, Some(&own)), board);
    }

    #[test]
    fn test_stale_id_is_identity(name in "[a-z]{1,8}", over in 0..2usize) {
        let board = column_board(&tasks("a", 3), &tasks("b", 2));
        let stale = TaskId::from_string(format!("stale-{name}"));
        let target = ColumnId::from(["a", "b"][over]);

        prop_assert_eq!(board.on_drag_end(&stale, Some(&target)), board);
    }
}
