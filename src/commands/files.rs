//! `sddpack files` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::manifest::Manifest;
use crate::ports::Presence;
use crate::report;

/// Execute the `files` command.
///
/// Lists each manifest entry with its presence status, in manifest order,
/// without reading any contents.
///
/// # Errors
///
/// Returns an error string if the base directory or an entry cannot be
/// inspected, or `out` cannot be written. A base directory that does not
/// exist lists every entry as missing.
pub fn run(ctx: &ServiceContext, manifest: &Manifest, out: &mut dyn Write) -> Result<(), String> {
    report::check_base_dir(ctx, manifest)?;
    for entry in &manifest.files {
        let status = match report::probe_entry(ctx, manifest, entry)? {
            Presence::Present => "present",
            Presence::Absent => "missing",
        };
        writeln!(out, "{status:<8} {entry}")
            .map_err(|e| format!("Failed to write listing: {e}"))?;
    }
    Ok(())
}
