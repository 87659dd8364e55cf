//! AssetBind CLI - Command-line interface
//!
//! Generates embedded asset binding files and redistributes sprite frame
//! archives using the assetbind library.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use assetbind::config::ConfigFile;
use assetbind::logging;
use clap::{Parser, Subcommand};
use console::style;

use commands::config::ConfigCommands;
use commands::generate::GenerateArgs;
use commands::redistribute::RedistributeArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "assetbind")]
#[command(version, about = "Embedded asset bindings for game projects", long_about = None)]
struct Cli {
    /// Configuration file (default: ./assetbind.ini if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the bindings file for an asset category
    Generate {
        /// Asset category (e.g., sprites, fonts)
        category: String,

        /// Output file path
        output: PathBuf,

        /// Override the category's asset root
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Unpack lifeform frame archives into the sprite tree
    Redistribute {
        /// Directory containing <class>-<stage>.zip archives
        #[arg(long)]
        archive_dir: Option<PathBuf>,

        /// Root directory receiving <class>/species_<n>/ folders
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (config, source) = ConfigFile::resolve(cli.config.as_deref())?;

    let mut logging_config = config.logging.clone();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    let _guard = logging::init(&logging_config)?;

    match cli.command {
        Commands::Generate {
            category,
            output,
            root,
        } => commands::generate::run(
            &config,
            GenerateArgs {
                category,
                output,
                root,
            },
        ),
        Commands::Redistribute {
            archive_dir,
            output_dir,
        } => commands::redistribute::run(
            &config,
            RedistributeArgs {
                archive_dir,
                output_dir,
            },
        ),
        Commands::Config(command) => commands::config::run(command, &config, source.as_deref()),
    }
}
