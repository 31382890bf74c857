//! `conntree` CLI - inspect connection trees exported from a remote-access
//! management API
//!
//! Renders group tree documents as the node tree a list view would show,
//! and encodes or decodes client identifiers.

mod cli;
mod commands;
mod error;
mod format;

use clap::Parser;
use cli::Cli;
use conntree_core::config::TreeSettings;
use conntree_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = TreeSettings::load_or_default(cli.config.as_deref())?;

    let level = if cli.quiet {
        TracingLevel::Error
    } else if cli.verbose > 0 {
        TracingLevel::from_verbosity(cli.verbose)
    } else {
        settings.tracing_level()
    };
    let output = cli.log_file.map_or(TracingOutput::Stderr, TracingOutput::File);
    init_tracing(&TracingConfig::new().with_level(level).with_output(output))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    commands::dispatch(&settings, cli.command)
}
