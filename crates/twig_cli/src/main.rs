//! twig CLI
//!
//! Runs visitor passes over JSON syntax forests.

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            input,
            passes,
            max_depth,
            output,
            trace,
        } => commands::run::run_passes(
            cli.config.as_deref(),
            input,
            passes,
            *max_depth,
            output.as_deref(),
            *trace,
        ),
        Commands::Check { input } => commands::check::run_check(input),
    }
}
