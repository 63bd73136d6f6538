use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use timediff_cli::commands::{block, report, total, util};
use timediff_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Block { path, tag, json }) => {
            let config = load_config(cli.config.as_deref())?;
            let tag = config.block_tag(tag.as_deref())?;
            let source = util::read_input(path.as_deref())?;
            block::run(&mut stdout, &source, tag, *json)?;
        }
        Some(Commands::Total { path, tag, json }) => {
            let config = load_config(cli.config.as_deref())?;
            let tag = config.block_tag(tag.as_deref())?;
            let document = util::read_input(Some(path.as_path()))?;
            total::run(&mut stdout, &document, tag, *json)?;
        }
        Some(Commands::Report { path, tag }) => {
            let config = load_config(cli.config.as_deref())?;
            let tag = config.block_tag(tag.as_deref())?;
            let document = util::read_input(Some(path.as_path()))?;
            report::run(&mut stdout, &document, tag)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
