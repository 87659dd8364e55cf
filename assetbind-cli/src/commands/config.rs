//! Configuration inspection commands.
//!
//! Provides `config list` and `config path` for checking which settings a
//! run would use.

use std::path::Path;

use assetbind::config::{ConfigFile, DEFAULT_CONFIG_FILE};
use clap::Subcommand;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    List,

    /// Show the configuration file that is loaded
    Path,
}

/// Run a config subcommand.
pub fn run(
    command: ConfigCommands,
    config: &ConfigFile,
    source: Option<&Path>,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::List => run_list(config, source),
        ConfigCommands::Path => run_path(source),
    }
}

fn run_list(config: &ConfigFile, source: Option<&Path>) -> Result<(), CliError> {
    match source {
        Some(path) => println!("; loaded from {}", path.display()),
        None => println!("; built-in defaults"),
    }
    print!("{}", config.to_ini_string());
    Ok(())
}

fn run_path(source: Option<&Path>) -> Result<(), CliError> {
    match source {
        Some(path) => println!("{}", path.display()),
        None => println!("{} (not found, using defaults)", DEFAULT_CONFIG_FILE),
    }
    Ok(())
}
