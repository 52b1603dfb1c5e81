use std::io;

use anyhow::Result;
use clap::Parser;

use dirtree::cli::Cli;
use dirtree::commands;
use dirtree::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        commands::generate::completions(shell, &mut io::stdout())?;
        return Ok(());
    }
    if cli.man {
        commands::generate::man_page(&mut io::stdout())?;
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    commands::tree::run(&cli, &config)?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree={}", level)));

    // stdout carries the tree
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
