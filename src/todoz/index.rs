//! # Display Indexes
//!
//! Raw ids are millisecond timestamps, which nobody wants to type. UIs number
//! items `1..=n` by their position in the full collection instead. Positions
//! do not depend on the active filter, so `3` means the same item whether the
//! user is looking at all, active or completed todos.
//!
//! A [`TodoSelector`] is what a UI hands back: either such an index or a raw
//! id written as `id:<number>`. An index names exactly one item even when a
//! snapshot repeats an id; a raw id names every item carrying it.

use crate::model::{Filter, TodoId, TodoItem, TodoList};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub index: usize,
    pub item: TodoItem,
}

/// Numbers the whole list and keeps the entries visible under `filter`.
pub fn index_todos(list: &TodoList, filter: Filter) -> Vec<DisplayTodo> {
    list.items()
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(i, item)| DisplayTodo {
            index: i + 1,
            item: item.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoSelector {
    Index(usize),
    Id(TodoId),
}

impl TodoSelector {
    /// Applies `at` to the 0-based position of an index, or `by_id` to a raw
    /// id. An index of 0 selects nothing.
    pub fn apply<T>(
        &self,
        list: &mut TodoList,
        at: impl FnOnce(&mut TodoList, usize) -> Option<T>,
        by_id: impl FnOnce(&mut TodoList, TodoId) -> Vec<T>,
    ) -> Vec<T> {
        match *self {
            TodoSelector::Index(n) => n
                .checked_sub(1)
                .and_then(|pos| at(list, pos))
                .into_iter()
                .collect(),
            TodoSelector::Id(id) => by_id(list, id),
        }
    }
}

impl fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoSelector::Index(n) => write!(f, "{}", n),
            TodoSelector::Id(id) => write!(f, "id:{}", id),
        }
    }
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("id:") {
            return rest
                .parse()
                .map(TodoSelector::Id)
                .map_err(|_| format!("Invalid id: {}", rest));
        }
        s.parse()
            .map(TodoSelector::Index)
            .map_err(|_| format!("Invalid index format: {}", s))
    }
}
