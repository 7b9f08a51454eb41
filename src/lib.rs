//! Core library entry for the `sddpack` CLI.
//!
//! `sddpack` reads an ordered list of design documents from a base directory
//! and prints them as one labeled review package on standard output.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod manifest;
pub mod ports;
pub mod report;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` are printed by clap and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| format!("Failed to print usage: {e}"))?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
