//! Bindings file generation command.

use std::path::PathBuf;

use assetbind::config::ConfigFile;
use assetbind::emit::BindingEmitter;
use console::style;

use crate::error::CliError;

/// Arguments for `assetbind generate`.
#[derive(Debug)]
pub struct GenerateArgs {
    pub category: String,
    pub output: PathBuf,
    pub root: Option<PathBuf>,
}

/// Generate the bindings file for a category.
pub fn run(config: &ConfigFile, args: GenerateArgs) -> Result<(), CliError> {
    let mut category = config.category(&args.category)?.clone();
    if let Some(root) = args.root {
        category.root = root;
    }

    let summary = BindingEmitter::new(&category).emit(&args.output)?;

    println!(
        "{} {} ({} bindings, {} groups)",
        style("Wrote").green().bold(),
        summary.output.display(),
        summary.bindings,
        summary.groups
    );

    Ok(())
}
