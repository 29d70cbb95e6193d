//! Logbook CLI
//!
//! Records contributions in the ledger and keeps the AsciiDoc report in
//! sync. Without a subcommand it starts the interactive menu.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io;

use anyhow::Result;
use clap::Parser;
use logbook_cli::cli::{Cli, Command};
use logbook_cli::menu::Menu;
use logbook_cli::{commands, config_handlers};
use logbook_core::{Logbook, LogbookConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config_path();
    tracing::debug!(config = %config_path.display(), "Resolved configuration file");

    let mut stdout = io::stdout().lock();

    if let Some(Command::Config { action }) = &cli.command {
        config_handlers::handle_config_command(&config_path, action, &mut stdout)?;
        return Ok(());
    }

    let book = Logbook::new(LogbookConfig::load(&config_path)?);
    tracing::debug!(
        ledger = %book.config().ledger_file().display(),
        report = %book.config().report_file().display(),
        "Opened logbook"
    );

    match cli.command {
        Some(Command::Add {
            user,
            section,
            issue,
            any_user,
        }) => commands::cmd_add(&book, &user, &section, issue, any_user, &mut stdout)?,
        Some(Command::Remove { id }) => commands::cmd_remove(&book, id, &mut stdout)?,
        Some(Command::Refresh) => commands::cmd_refresh(&book, &mut stdout)?,
        Some(Command::List) => commands::cmd_list(&book, &mut stdout)?,
        Some(Command::Roster) => commands::cmd_roster(&book, &mut stdout)?,
        Some(Command::Menu) | None => {
            Menu::new(&book, io::stdin().lock(), &mut stdout).run()?;
        }
        Some(Command::Config { .. }) => {}
    }

    Ok(())
}
