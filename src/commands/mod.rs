//! Command dispatch and handlers.

pub mod files;
pub mod pack;

use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::manifest::{self, Manifest, BASE_DIR_ENV};

/// Dispatch a parsed command line to its handler.
///
/// A `.env` file in the working directory is loaded first; it never
/// overrides variables already set in the environment.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be resolved or the
/// selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let dotenv = dotenvy::dotenv().ok();
    let ctx = ServiceContext::live();
    let env_base_dir = env::var_os(BASE_DIR_ENV).map(PathBuf::from);

    if cli.verbose {
        if let Some(path) = &dotenv {
            eprintln!("Loaded environment from {}", path.display());
        }
    }

    let manifest = manifest::resolve(&ctx, &cli.package, env_base_dir)?;
    if cli.verbose {
        describe(cli, &manifest);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch_with_context(cli, &ctx, &manifest, &mut out)
}

/// Dispatch a command with the given service context, manifest and output.
fn dispatch_with_context(
    cli: &Cli,
    ctx: &ServiceContext,
    manifest: &Manifest,
    out: &mut dyn Write,
) -> Result<(), String> {
    match cli.command.unwrap_or(Command::Pack) {
        Command::Pack => pack::run(ctx, manifest, cli.verbose, out),
        Command::Files => files::run(ctx, manifest, out),
    }
}

fn describe(cli: &Cli, manifest: &Manifest) {
    match &cli.package.manifest {
        Some(path) => eprintln!("Manifest: {}", path.display()),
        None => eprintln!("Manifest: built-in"),
    }
    eprintln!("Base directory: {}", manifest.base_dir.display());
    eprintln!("Files: {}", manifest.files.len());
}
