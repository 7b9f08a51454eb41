//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `sddpack`.
#[derive(Debug, Parser)]
#[command(name = "sddpack", version, about = "Concatenate design documents into a review package")]
pub struct Cli {
    /// Where the package definition comes from.
    #[command(flatten)]
    pub package: PackageArgs,

    /// Print diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute. Defaults to `pack`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides applied on top of the built-in package definition.
#[derive(Debug, Clone, Default, Args)]
pub struct PackageArgs {
    /// Directory the listed files are resolved against.
    #[arg(short, long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// YAML file with `title`, `base_dir` and `files` keys.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the concatenated document package.
    Pack,
    /// List manifest entries with their presence status.
    Files,
}
