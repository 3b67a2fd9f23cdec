//! Level package layout: a base directory plus the ordered list of files that
//! make up its content hash.

use std::path::{Path, PathBuf};

/// Files hashed for a standard level, in hashing order.
pub const DEFAULT_FILES: [&str; 5] = [
    "info.dat",
    "Hard.dat",
    "Expert.dat",
    "ExpertPlus.dat",
    "Lightshow.dat",
];

pub fn default_files() -> Vec<PathBuf> {
    DEFAULT_FILES.iter().map(PathBuf::from).collect()
}

/// A level directory and the files (relative to it) that feed the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPackage {
    base: PathBuf,
    files: Vec<PathBuf>,
}

impl LevelPackage {
    pub fn new(base: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            base: base.into(),
            files,
        }
    }

    /// Package using [`DEFAULT_FILES`].
    pub fn standard(base: impl Into<PathBuf>) -> Self {
        Self::new(base, default_files())
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Full paths in hashing order. Order matters: it defines the byte stream.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(move |f| self.base.join(f))
    }
}
