use clap::{Parser, Subcommand};
use todoz::model::Filter;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version = get_version())]
#[command(about = "A small to-do list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Text words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Which todos to show (all, active, completed)
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Mark a todo done, or not done again
    #[command(alias = "t")]
    Toggle {
        /// Index from `todoz list` (e.g. 2) or raw id (e.g. id:1700000000000)
        selector: String,
    },

    /// Remove a todo
    #[command(alias = "rm")]
    Remove {
        /// Index from `todoz list` (e.g. 2) or raw id (e.g. id:1700000000000)
        selector: String,
    },

    /// Remove all completed todos
    Clear,

    /// Replace the stored list with an empty one
    Reset,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, pretty-snapshot)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
