//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Doxsuite - cross-referenced multi-package doxygen builds
#[derive(Parser)]
#[command(name = "doxsuite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build documentation for every package in the suite
    Build(BuildArgs),

    /// Remove the suite's build root
    Clean(CleanArgs),

    /// Check that the environment can run a suite build
    Doctor,

    /// Create a starter Doxsuite.toml
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the suite manifest (defaults to searching upward for Doxsuite.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Emit the per-package configuration plan as JSON (no build)
    #[arg(long)]
    pub plan: bool,

    /// Per-invocation deadline for the external tool, in seconds (0 disables)
    #[arg(long, default_value_t = 600)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the suite manifest (defaults to searching upward for Doxsuite.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Suite name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
