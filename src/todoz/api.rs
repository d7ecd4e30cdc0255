//! # API Facade
//!
//! [`TodoApi`] is the Todo Store: the one object that owns the collection,
//! the current filter and the storage backend. UIs hold one instance, send it
//! user intents and re-render from what it returns.
//!
//! ## Lifecycle
//!
//! 1. [`TodoApi::open`] loads the snapshot. A corrupt snapshot is an error,
//!    never an empty list; the caller picks between aborting and
//!    [`TodoApi::reset`].
//! 2. Mutations (`add`, `toggle`, `remove`, `clear_completed`) change the
//!    in-memory list and write the whole snapshot before returning.
//! 3. Views and counts are computed from the list on every call.
//!
//! The filter is view state only: it is never persisted and starts as
//! [`Filter::All`] on every open.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::TodoSelector;
use crate::model::{Filter, TodoId, TodoItem, TodoList};
use crate::store::KeyValueStore;

pub struct TodoApi<S: KeyValueStore> {
    store: S,
    slot: commands::Slot,
    todos: TodoList,
    filter: Filter,
}

impl<S: KeyValueStore> TodoApi<S> {
    /// Loads the collection from `slot`. Fails with `StorageCorrupt` if the
    /// stored value does not decode.
    pub fn open(store: S, slot: commands::Slot) -> Result<Self> {
        let todos = slot.load(&store)?;
        Ok(Self {
            store,
            slot,
            todos,
            filter: Filter::default(),
        })
    }

    /// Starts from an empty collection, overwriting whatever `slot` held.
    pub fn reset(mut store: S, slot: commands::Slot) -> Result<(Self, commands::CmdResult)> {
        let (todos, result) = commands::reset::run(&mut store, &slot)?;
        let api = Self {
            store,
            slot,
            todos,
            filter: Filter::default(),
        };
        Ok((api, result))
    }

    pub fn add(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.slot, &mut self.todos, text)
    }

    pub fn toggle(&mut self, id: TodoId) -> Result<commands::CmdResult> {
        self.toggle_selected(TodoSelector::Id(id))
    }

    pub fn toggle_selected(&mut self, selector: TodoSelector) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, &self.slot, &mut self.todos, selector)
    }

    pub fn remove(&mut self, id: TodoId) -> Result<commands::CmdResult> {
        self.remove_selected(TodoSelector::Id(id))
    }

    pub fn remove_selected(&mut self, selector: TodoSelector) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, &self.slot, &mut self.todos, selector)
    }

    pub fn clear_completed(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, &self.slot, &mut self.todos)
    }

    /// Indexed listing under the current filter, with counts.
    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.todos, self.filter)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Items visible under the current filter.
    pub fn view(&self) -> Vec<&TodoItem> {
        self.todos.view(self.filter)
    }

    pub fn derive_view(&self, filter: Filter) -> Vec<&TodoItem> {
        self.todos.view(filter)
    }

    pub fn active_count(&self) -> usize {
        self.todos.active_count()
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Skipped, Slot};
