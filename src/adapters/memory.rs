//! In-memory filesystem adapter for unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::{FileSystem, Presence};

/// A fake directory tree held in memory.
///
/// Every recorded file implicitly creates its parent directories. Paths
/// marked as denied fail every operation with a permission error, and paths
/// marked unreadable exist but fail on read. All reads are logged.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    denied: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    reads: Mutex<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory (and its ancestors).
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        for ancestor in path.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    /// Adds a file with the given contents.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self = self.with_dir(parent.to_path_buf());
        }
        self.files.insert(path, contents.to_string());
        self
    }

    /// Makes every operation on `path` fail with a permission error.
    #[must_use]
    pub fn with_denied(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    /// Adds a file that exists but cannot be read.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self = self.with_file(path.clone(), "");
        self.unreadable.insert(path);
        self
    }

    /// Paths passed to `read_to_string`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().expect("reads lock poisoned").clone()
    }

    fn check_access(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if path.ancestors().any(|p| self.denied.contains(p)) {
            return Err(format!("permission denied: {}", path.display()).into());
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn probe(&self, path: &Path) -> Result<Presence, Box<dyn std::error::Error + Send + Sync>> {
        self.check_access(path)?;
        if self.files.contains_key(path) || self.dirs.contains(path) {
            Ok(Presence::Present)
        } else {
            Ok(Presence::Absent)
        }
    }

    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.reads.lock().expect("reads lock poisoned").push(path.to_path_buf());
        self.check_access(path)?;
        if self.unreadable.contains(path) {
            return Err(format!("permission denied: {}", path.display()).into());
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }
}
