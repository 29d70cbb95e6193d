//! Handler functions for `logbook config` subcommands.

use std::io::Write;
use std::path::Path;

use logbook_core::LogbookConfig;

use crate::cli::ConfigAction;
use crate::error::{Error, Result};

/// Handle a config subcommand for the config file at `config_path`.
pub fn handle_config_command(
    config_path: &Path,
    action: &ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Init { force } => cmd_config_init(config_path, *force, out),
        ConfigAction::Show => cmd_config_show(config_path, out),
    }
}

/// Show the config file path and whether it exists.
pub fn cmd_config_path(config_path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", config_path.display())?;
    if !config_path.exists() {
        writeln!(
            out,
            "(file does not exist; defaults apply until `logbook config init` creates it)"
        )?;
    }
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init(config_path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    if config_path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let toml_str = LogbookConfig::default().to_toml_string()?;
    std::fs::write(config_path, toml_str)?;

    writeln!(out, "Config file created at {}", config_path.display())?;
    Ok(())
}

/// Print the effective configuration and the files it resolves to.
pub fn cmd_config_show(config_path: &Path, out: &mut impl Write) -> Result<()> {
    let config = LogbookConfig::load(config_path)?;
    writeln!(out, "# ledger: {}", config.ledger_file().display())?;
    writeln!(out, "# report: {}", config.report_file().display())?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}
