//! Level content digest.
//!
//! The digest of a level is the hash of its files' raw bytes, concatenated in
//! list order. Files are read whole, one at a time; a file handle is never held
//! past its own read.

use crate::error::HashError;
use crate::package::LevelPackage;
use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;

/// Streaming accumulator over level files. SHA-1 unless another `Digest` is named.
pub struct DigestBuilder<D = Sha1> {
    hasher: D,
    absorbed: usize,
}

impl<D: Digest> DigestBuilder<D> {
    pub fn new() -> Self {
        Self {
            hasher: D::new(),
            absorbed: 0,
        }
    }

    pub fn absorb_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Read `path` entirely and feed it to the accumulator.
    pub fn absorb_file(&mut self, path: &Path) -> Result<(), HashError> {
        let data = fs::read(path).map_err(|source| HashError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "absorbed level file");
        self.absorb_bytes(&data);
        self.absorbed += 1;
        Ok(())
    }

    /// Finalize and return the digest as lowercase hex.
    pub fn finish(self) -> String {
        let digest = hex::encode(self.hasher.finalize());
        tracing::debug!(files = self.absorbed, %digest, "level digest finalized");
        digest
    }
}

impl<D: Digest> Default for DigestBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash `files` (relative to `base`, in order) with the accumulator `D`.
/// Stops at the first file that cannot be read.
pub fn hash_files<D, P>(base: &Path, files: &[P]) -> Result<String, HashError>
where
    D: Digest,
    P: AsRef<Path>,
{
    let mut builder = DigestBuilder::<D>::new();
    for name in files {
        builder.absorb_file(&base.join(name))?;
    }
    Ok(builder.finish())
}

pub fn sha1_hex<P: AsRef<Path>>(base: &Path, files: &[P]) -> Result<String, HashError> {
    hash_files::<Sha1, P>(base, files)
}

/// SHA-1 digest of a level package: the level's content identifier.
pub fn hash_package(pkg: &LevelPackage) -> Result<String, HashError> {
    sha1_hex(pkg.base(), pkg.files())
}
