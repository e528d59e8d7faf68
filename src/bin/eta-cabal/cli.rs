//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// eta-cabal - inspect and regenerate Eta cabal descriptors
#[derive(Parser)]
#[command(name = "eta-cabal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the project declared by a descriptor
    Show(ShowArgs),

    /// Regenerate descriptor text from the parsed project
    Emit(EmitArgs),

    /// Resolve compiled archive paths for the project's units
    Artifacts(ArtifactsArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project directory (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Print the project as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EmitArgs {
    /// Project directory (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ArtifactsArgs {
    /// Project directory (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Build output root directory
    #[arg(long)]
    pub build_root: PathBuf,

    /// Version tag of the Eta dist directory
    #[arg(long)]
    pub eta_version: String,

    /// Restrict to one unit kind
    #[arg(long, value_enum)]
    pub kind: Option<KindFilter>,

    /// Print candidate paths without checking the filesystem
    #[arg(long)]
    pub all: bool,
}

/// Unit kind selector for `artifacts`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindFilter {
    Lib,
    Exe,
    Test,
}
