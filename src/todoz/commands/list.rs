use crate::commands::CmdResult;
use crate::index::index_todos;
use crate::model::{Filter, TodoList};

pub fn run(todos: &TodoList, filter: Filter) -> CmdResult {
    CmdResult::default()
        .with_listed_todos(index_todos(todos, filter))
        .with_counts(todos.active_count(), todos.len())
}
