//! Live filesystem adapter using `std::fs`.

use std::io::ErrorKind;
use std::path::Path;

use crate::ports::filesystem::{FileSystem, Presence};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn probe(&self, path: &Path) -> Result<Presence, Box<dyn std::error::Error + Send + Sync>> {
        // `try_exists` maps NotFound to `Ok(false)`; a file used as a directory
        // is absent too. Everything else surfaces.
        match path.try_exists() {
            Ok(true) => Ok(Presence::Present),
            Ok(false) => Ok(Presence::Absent),
            Err(e) if e.kind() == ErrorKind::NotADirectory => Ok(Presence::Absent),
            Err(e) => Err(e.into()),
        }
    }

    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }
}
