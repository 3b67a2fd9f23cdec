//! Error type for level hashing.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a level digest.
///
/// Missing files, permission errors and bad base paths all land here; the
/// caller only learns which path could not be read and the underlying I/O error.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("cannot read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// Path of the file that could not be read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            HashError::FileAccess { path, .. } => path,
        }
    }
}
