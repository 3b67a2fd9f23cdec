//! `levelhash hash` – print the content hash of a level directory.

use anyhow::Result;
use levelhash_core::config::LevelHashConfig;
use levelhash_core::digest;
use std::path::PathBuf;

/// Resolve the package from args + config and compute its digest.
pub fn hash_level(
    cfg: &LevelHashConfig,
    base: Option<PathBuf>,
    files: Vec<PathBuf>,
) -> Result<String> {
    let pkg = cfg.package(base, files)?;
    tracing::info!(
        "hashing {} files in {}",
        pkg.files().len(),
        pkg.base().display()
    );
    Ok(digest::hash_package(&pkg)?)
}

pub fn run_hash(
    cfg: &LevelHashConfig,
    base: Option<PathBuf>,
    files: Vec<PathBuf>,
) -> Result<()> {
    let digest = hash_level(cfg, base, files)?;
    println!("{digest}");
    Ok(())
}
