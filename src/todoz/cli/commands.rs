//! # CLI Layer
//!
//! This module is **one possible UI client** for todoz: it maps shell
//! arguments to user intents, sends them to `TodoApi`, and prints what comes
//! back.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, loads config, opens the store
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::render::{print_messages, print_todo_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use todoz::api::{ConfigAction, Slot, TodoApi};
use todoz::commands;
use todoz::config::{TodozConfig, CONFIG_KEYS};
use todoz::error::{Result, TodozError};
use todoz::index::TodoSelector;
use todoz::model::Filter;
use todoz::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory, mostly for tests and scripting.
const HOME_ENV: &str = "TODOZ_HOME";

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir()?;
    debug!(data_dir = %data_dir.display(), "resolved data dir");

    // These work even when the snapshot is corrupt.
    match &cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&data_dir, key.clone(), value.clone())
        }
        Some(Commands::Reset) => return handle_reset(&data_dir),
        _ => {}
    }

    let mut ctx = init_context(&data_dir)?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text.join(" ")),
        Some(Commands::List { filter }) => handle_list(&mut ctx, filter),
        Some(Commands::Toggle { selector }) => handle_toggle(&mut ctx, &selector),
        Some(Commands::Remove { selector }) => handle_remove(&mut ctx, &selector),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Reset) | Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, Filter::All),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "todoz", "todoz")
        .ok_or_else(|| TodozError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn load_slot(data_dir: &Path) -> Result<Slot> {
    let config = TodozConfig::load(data_dir)?;
    Ok(Slot::from_config(&config))
}

fn init_context(data_dir: &Path) -> Result<AppContext> {
    let slot = load_slot(data_dir)?;
    let store = FileStore::new(data_dir.to_path_buf());
    let api = TodoApi::open(store, slot)?;
    Ok(AppContext { api })
}

fn parse_selector(input: &str) -> Result<TodoSelector> {
    input.parse().map_err(TodozError::Api)
}

fn handle_add(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.add(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Filter) -> Result<()> {
    debug!(%filter, "listing todos");
    ctx.api.set_filter(filter);
    let result = ctx.api.list();
    print_todo_list(
        &result.listed_todos,
        result.active_count.unwrap_or_default(),
        result.total_count.unwrap_or_default(),
    );
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let selector = parse_selector(selector)?;
    let result = ctx.api.toggle_selected(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let selector = parse_selector(selector)?;
    let result = ctx.api.remove_selected(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(data_dir: &Path) -> Result<()> {
    let slot = load_slot(data_dir)?;
    let store = FileStore::new(data_dir.to_path_buf());
    let (_, result) = TodoApi::reset(store, slot)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
