//! Service context bundling the port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations; commands only
/// ever see the trait objects.
pub struct ServiceContext {
    /// Filesystem for reading documents and manifests.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context around the given filesystem adapter.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }
}
