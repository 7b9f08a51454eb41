//! `sddpack pack` command, also run when no subcommand is given.

use std::io::Write;

use crate::context::ServiceContext;
use crate::manifest::Manifest;
use crate::report;

/// Execute the `pack` command, streaming the report to `out`.
///
/// # Errors
///
/// Returns an error string if the base directory is inaccessible, a listed
/// file cannot be read, or `out` cannot be written.
pub fn run(
    ctx: &ServiceContext,
    manifest: &Manifest,
    verbose: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    let summary = report::write_report(ctx, manifest, out)?;
    if verbose {
        if !summary.base_present {
            eprintln!("Base directory {} does not exist", manifest.base_dir.display());
        }
        eprintln!("Packed {} file(s), {} not found", summary.found, summary.missing);
    }
    Ok(())
}
