//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`todoz`].
//!
//! ## Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments defaults to `todoz list`.
//!
//! ## Selecting Todos
//!
//! `toggle` and `remove` take the number shown by `list` (positions in the
//! full list, so they do not shift when filtering) or a raw id as `id:<n>`.
//!
//! ## Corrupt Storage
//!
//! If the stored list cannot be read, every command except `reset` and
//! `config` stops with an error. Nothing is overwritten until the user runs
//! `todoz reset`.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call API and format output
//! - `render`: Output formatting (checkboxes, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
