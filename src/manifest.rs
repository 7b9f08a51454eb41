//! Package definition: title, base directory and the ordered file list.
//!
//! The built-in package can be overridden, in increasing precedence, by a
//! YAML manifest file, the `SDDPACK_BASE_DIR` environment variable and the
//! `--base-dir` flag:
//!
//! ```yaml
//! title: Artifact Nexus SDD Package
//! base_dir: docs/sdd/artifact-nexus-sdd
//! files:
//!   - README.md
//!   - trello-cards/BOARD.md
//! ```

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::cli::PackageArgs;
use crate::context::ServiceContext;

/// Title of the built-in package.
pub const DEFAULT_TITLE: &str = "Artifact Nexus SDD Package";

/// Base directory of the built-in package.
pub const DEFAULT_BASE_DIR: &str = "/home/pets/temp/jsonl_dashboard/docs/sdd/artifact-nexus-sdd";

/// Files of the built-in package, in output order.
pub const DEFAULT_FILES: [&str; 5] = [
    "README.md",
    "requirements.md",
    "gaps.md",
    "trello-cards/KICKOFF.md",
    "trello-cards/BOARD.md",
];

/// Environment variable overriding the base directory.
pub const BASE_DIR_ENV: &str = "SDDPACK_BASE_DIR";

/// A fully resolved package definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Text of the report's title line.
    pub title: String,
    /// Directory every entry of `files` is resolved against.
    pub base_dir: PathBuf,
    /// Relative file paths; order is output order.
    pub files: Vec<String>,
}

/// On-disk manifest shape. Omitted keys keep the built-in values.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    title: Option<String>,
    base_dir: Option<PathBuf>,
    files: Option<Vec<String>>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            files: DEFAULT_FILES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Manifest {
    /// Parses a YAML manifest on top of the built-in package.
    ///
    /// A relative `base_dir` is joined onto `origin_dir`, the directory the
    /// manifest was read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str, origin_dir: &Path) -> Result<Self, String> {
        let file: ManifestFile = if yaml.trim().is_empty() {
            ManifestFile::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse manifest: {e}"))?
        };

        let mut manifest = Self::default();
        if let Some(title) = file.title {
            manifest.title = title;
        }
        if let Some(base_dir) = file.base_dir {
            manifest.base_dir =
                if base_dir.is_absolute() { base_dir } else { origin_dir.join(base_dir) };
        }
        if let Some(files) = file.files {
            manifest.files = files;
        }
        Ok(manifest)
    }

    /// Reads and parses a manifest file through `ctx.fs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(ctx: &ServiceContext, path: &Path) -> Result<Self, String> {
        let contents = ctx
            .fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read manifest {}: {e}", path.display()))?;
        let origin_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_yaml(&contents, origin_dir).map_err(|e| format!("{}: {e}", path.display()))
    }

    /// Checks that the package lists at least one file and that every entry
    /// stays inside the base directory.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending entry.
    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("Manifest lists no files".to_string());
        }
        for entry in &self.files {
            if entry.trim().is_empty() {
                return Err("Manifest contains an empty file entry".to_string());
            }
            let escapes = Path::new(entry).components().any(|c| {
                matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
            });
            if escapes {
                return Err(format!(
                    "Manifest entry {entry:?} must be a relative path inside the base directory"
                ));
            }
        }
        Ok(())
    }

    /// Resolves a relative entry against the base directory.
    #[must_use]
    pub fn resolve(&self, entry: &str) -> PathBuf {
        self.base_dir.join(entry)
    }
}

/// Builds the manifest for a run from CLI overrides and the environment.
///
/// `env_base_dir` is the value of [`BASE_DIR_ENV`], if set.
///
/// # Errors
///
/// Returns an error if the manifest file cannot be loaded or the result
/// fails [`Manifest::validate`].
pub fn resolve(
    ctx: &ServiceContext,
    args: &PackageArgs,
    env_base_dir: Option<PathBuf>,
) -> Result<Manifest, String> {
    let mut manifest = match &args.manifest {
        Some(path) => Manifest::load(ctx, path)?,
        None => Manifest::default(),
    };
    if let Some(dir) = env_base_dir.filter(|d| !d.as_os_str().is_empty()) {
        manifest.base_dir = dir;
    }
    if let Some(dir) = &args.base_dir {
        manifest.base_dir.clone_from(dir);
    }
    manifest.validate()?;
    Ok(manifest)
}
