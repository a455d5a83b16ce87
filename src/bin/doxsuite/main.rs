//! Doxsuite CLI - cross-referenced multi-package doxygen builds

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("doxsuite=debug")
    } else {
        EnvFilter::new("doxsuite=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, cli.verbose, cli.no_color),
        Commands::Clean(args) => commands::clean::execute(args, cli.verbose, cli.no_color),
        Commands::Doctor => commands::doctor::execute(cli.verbose),
        Commands::Init(args) => commands::init::execute(args, cli.verbose, cli.no_color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
