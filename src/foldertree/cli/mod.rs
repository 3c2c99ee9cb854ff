//! # CLI Layer
//!
//! The binary is **one client** of the foldertree library. It is the only
//! place that:
//! - Parses arguments
//! - Installs the tracing subscriber
//! - Writes to stdout/stderr and picks exit codes
//!
//! Events come back from [`FolderApi`] as ordered `CmdMessage`s and are
//! printed as soon as each line has run, so output interleaves with input
//! when reading from an interactive stdin.

mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use foldertree::api::FolderApi;
use foldertree::config::FolderConfig;
use foldertree::error::{FolderError, Result};
use foldertree::source::{replay, CommandSource};
use print::{print_audit, print_messages};
use setup::Cli;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    let mut api = FolderApi::new(config.list_style());

    let source = if cli.commands.is_empty() {
        CommandSource::from_arg(cli.file.clone())
    } else {
        CommandSource::Inline(cli.commands.clone())
    };
    let reader = source.open()?;

    let stats = replay(&mut api, reader, |result| print_messages(&result.messages))?;
    tracing::info!(
        executed = stats.executed,
        failed = stats.failed,
        folders = api.store().len(),
        max_depth = ?api.store().max_depth(),
        "run finished"
    );

    if cli.audit {
        print_audit(&api.audit(), &stats);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("foldertree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FolderConfig> {
    let mut config = match &cli.config {
        Some(path) if !path.is_file() => {
            return Err(FolderError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => FolderConfig::load_file(path)?,
        None => match ProjectDirs::from("com", "foldertree", "foldertree") {
            Some(dirs) => FolderConfig::load(dirs.config_dir())?,
            None => FolderConfig::default(),
        },
    };

    if let Some(indent) = &cli.indent {
        config.set_indent(indent)?;
    }
    Ok(config)
}
