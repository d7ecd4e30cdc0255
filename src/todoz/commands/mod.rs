use crate::config::TodozConfig;
use crate::error::Result;
use crate::index::{DisplayTodo, TodoSelector};
use crate::model::{TodoItem, TodoList};
use crate::store::{snapshot, KeyValueStore, DEFAULT_KEY};

pub mod add;
pub mod clear;
pub mod config;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod reset;
pub mod toggle;

/// Where and how the snapshot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub key: String,
    pub pretty: bool,
}

impl Slot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pretty: false,
        }
    }

    pub fn from_config(config: &TodozConfig) -> Self {
        Self {
            key: config.storage_key.clone(),
            pretty: config.pretty_snapshot,
        }
    }

    pub fn load<S: KeyValueStore>(&self, store: &S) -> Result<TodoList> {
        snapshot::load(store, &self.key)
    }

    /// Write-through: the whole list replaces whatever the slot held.
    pub fn persist<S: KeyValueStore>(&self, store: &mut S, todos: &TodoList) -> Result<()> {
        snapshot::save(store, &self.key, todos, self.pretty)
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Why a command left the collection as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// `add` got blank text. Nothing was written.
    EmptyInput,
    /// No item matched. The snapshot was still written.
    ItemNotFound(TodoSelector),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<TodoItem>,
    pub listed_todos: Vec<DisplayTodo>,
    pub active_count: Option<usize>,
    pub total_count: Option<usize>,
    pub config: Option<TodozConfig>,
    pub skipped: Option<Skipped>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_counts(mut self, active: usize, total: usize) -> Self {
        self.active_count = Some(active);
        self.total_count = Some(total);
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_skipped(mut self, skipped: Skipped) -> Self {
        self.skipped = Some(skipped);
        self
    }
}
