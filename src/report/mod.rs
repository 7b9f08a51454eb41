//! Document concatenation, the review package itself.
//!
//! A report is a title block followed by one section per manifest entry, in
//! manifest order:
//!
//! ```text
//! # Artifact Nexus SDD Package
//!
//!
//! ## FILE: README.md
//!
//! <contents of README.md>
//!
//! ## FILE: gaps.md NOT FOUND
//!
//! ```
//!
//! Sections are written as soon as they are read; nothing is buffered
//! across entries. A missing file is reported inline, but any other failure
//! to inspect or read the tree aborts the run.

use std::io::Write;

use crate::context::ServiceContext;
use crate::manifest::Manifest;
use crate::ports::filesystem::Presence;

/// Annotation appended to the header of a missing file.
pub const NOT_FOUND_MARKER: &str = "NOT FOUND";

/// One labeled block of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    /// The file exists; `content` is its verbatim text.
    Found {
        /// Entry as listed in the manifest.
        path: &'a str,
        /// Full file contents.
        content: String,
    },
    /// Nothing exists at the resolved path.
    NotFound {
        /// Entry as listed in the manifest.
        path: &'a str,
    },
}

impl Section<'_> {
    /// Writes the section in report layout.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        match self {
            Section::Found { path, content } => write!(out, "\n## FILE: {path}\n\n{content}\n"),
            Section::NotFound { path } => write!(out, "\n## FILE: {path} {NOT_FOUND_MARKER}\n\n"),
        }
    }
}

/// Counts of what a finished report contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Sections that carried file contents.
    pub found: usize,
    /// Sections marked not found.
    pub missing: usize,
    /// Whether anything existed at the base directory.
    pub base_present: bool,
}

/// Checks that the base directory can be inspected.
///
/// A base that does not exist is not an error: every entry below it then
/// reports as not found. Returns whether anything exists at the base.
///
/// # Errors
///
/// Returns an error naming the base directory when its existence cannot be
/// determined.
pub fn check_base_dir(ctx: &ServiceContext, manifest: &Manifest) -> Result<Presence, String> {
    let base = &manifest.base_dir;
    ctx.fs
        .probe(base)
        .map_err(|e| format!("Cannot access base directory {}: {e}", base.display()))
}

/// Checks whether a manifest entry exists, without reading it.
///
/// # Errors
///
/// Returns an error if existence cannot be determined.
pub fn probe_entry(
    ctx: &ServiceContext,
    manifest: &Manifest,
    entry: &str,
) -> Result<Presence, String> {
    let path = manifest.resolve(entry);
    ctx.fs.probe(&path).map_err(|e| format!("Cannot access {}: {e}", path.display()))
}

/// Builds the section for one manifest entry.
///
/// Absent files are not read.
///
/// # Errors
///
/// Returns an error if the entry cannot be probed, or exists but cannot be
/// read.
pub fn read_section<'a>(
    ctx: &ServiceContext,
    manifest: &Manifest,
    entry: &'a str,
) -> Result<Section<'a>, String> {
    match probe_entry(ctx, manifest, entry)? {
        Presence::Absent => Ok(Section::NotFound { path: entry }),
        Presence::Present => {
            let path = manifest.resolve(entry);
            let content = ctx
                .fs
                .read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            Ok(Section::Found { path: entry, content })
        }
    }
}

/// Streams the full report for `manifest` to `out`.
///
/// The base directory is checked before anything is written, so a tree
/// whose existence cannot be determined produces no output at all.
///
/// # Errors
///
/// Returns an error on an inaccessible base directory, an unreadable file,
/// or a failed write.
pub fn write_report(
    ctx: &ServiceContext,
    manifest: &Manifest,
    out: &mut dyn Write,
) -> Result<ReportSummary, String> {
    let base = check_base_dir(ctx, manifest)?;

    write!(out, "# {}\n\n", manifest.title).map_err(write_error)?;

    let mut summary =
        ReportSummary { base_present: base == Presence::Present, ..ReportSummary::default() };
    for entry in &manifest.files {
        let section = read_section(ctx, manifest, entry)?;
        section.write_to(out).map_err(write_error)?;
        match section {
            Section::Found { .. } => summary.found += 1,
            Section::NotFound { .. } => summary.missing += 1,
        }
    }
    out.flush().map_err(write_error)?;
    Ok(summary)
}

#[allow(clippy::needless_pass_by_value)]
fn write_error(e: std::io::Error) -> String {
    format!("Failed to write report: {e}")
}
