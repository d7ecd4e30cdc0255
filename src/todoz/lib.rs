//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library**. The `todoz` binary is one
//! client of it; a GUI or web front-end would drive the same [`api::TodoApi`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The Todo Store: owns the list, the filter, the backend   │
//! │  - Turns user intents into command calls                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Mutation + write-through persistence                     │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait + JSON snapshot codec                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! Every mutation rewrites the whole list into one slot (`todos` by default)
//! as a JSON array of `{id, text, completed}`. Reads happen once, when the
//! store is opened. A snapshot that does not decode is reported as
//! [`error::TodozError::StorageCorrupt`] instead of being replaced with an
//! empty list.
//!
//! ## Module Overview
//!
//! - [`api`]: The Todo Store facade
//! - [`commands`]: One module per operation
//! - [`store`]: Key-value storage and the snapshot codec
//! - [`model`]: `TodoItem`, `TodoList`, `Filter`
//! - [`index`]: Display indexes (`1`, `2`, `id:<n>`)
//! - [`config`]: `config.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
