//! Filesystem port for reading the documents of a package.

use std::path::Path;

/// Outcome of an existence check.
///
/// Absence is an expected result, so it is a variant rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Something exists at the path.
    Present,
    /// Nothing exists at the path.
    Absent,
}

/// Read-only filesystem access.
///
/// Abstracting the filesystem lets the report logic run against an
/// in-memory tree in tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Checks whether anything exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined, e.g. when a parent
    /// directory is not searchable. "Not found" is never an error, and
    /// neither is a path running through a plain file.
    fn probe(&self, path: &Path) -> Result<Presence, Box<dyn std::error::Error + Send + Sync>>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
