//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use logbook_core::config::CONFIG_FILE_NAME;

/// Logbook - record who modified which section for which issue
#[derive(Parser, Debug)]
#[command(name = "logbook")]
#[command(author, version, about = "Record contributions and regenerate the logbook report", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to <dir>/logbook.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the logbook files
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Configuration file the invocation refers to.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.dir.join(CONFIG_FILE_NAME))
    }
}

/// Logbook subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record a contribution
    Add {
        /// Contributor handle
        #[arg(short, long)]
        user: String,
        /// Section that was modified (whitespace is removed)
        #[arg(short, long)]
        section: String,
        /// Issue number the change resolved
        #[arg(short, long)]
        issue: u64,
        /// Accept handles that are not on the roster
        #[arg(long)]
        any_user: bool,
    },
    /// Delete an entry by id
    Remove {
        /// Entry id, as shown by `list`
        id: u64,
    },
    /// Regenerate the report from the ledger
    Refresh,
    /// Print the ledger, newest entry first
    List,
    /// Print the configured roster
    Roster,
    /// Interactive add/delete/update menu
    Menu,
    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
