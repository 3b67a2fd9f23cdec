use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::package::{default_files, LevelPackage};

/// Global configuration loaded from `~/.config/levelhash/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelHashConfig {
    /// Level directory to hash when none is given on the command line.
    #[serde(default)]
    pub base_path: Option<PathBuf>,
    /// Files hashed, in order, relative to the level directory.
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,
}

impl Default for LevelHashConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            files: default_files(),
        }
    }
}

impl LevelHashConfig {
    /// Build the package to hash. `base` wins over `base_path`; `files`, when
    /// non-empty, replaces the configured list.
    pub fn package(&self, base: Option<PathBuf>, files: Vec<PathBuf>) -> Result<LevelPackage> {
        let base = base
            .or_else(|| self.base_path.clone())
            .context("no level directory given and no base_path configured")?;
        let files = if files.is_empty() {
            self.files.clone()
        } else {
            files
        };
        Ok(LevelPackage::new(base, files))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("levelhash")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LevelHashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LevelHashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("config {}", path.display()))?;
        }
        fs::write(&path, toml).with_context(|| format!("config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration if a config file exists, defaults otherwise. Never writes.
/// An unusable config location counts as "no file".
pub fn load_or_default() -> Result<LevelHashConfig> {
    let found = match xdg::BaseDirectories::with_prefix("levelhash") {
        Ok(dirs) => dirs.find_config_file("config.toml"),
        Err(e) => {
            tracing::warn!("config location unavailable: {e}");
            None
        }
    };
    match found {
        Some(path) => load_from(&path),
        None => Ok(LevelHashConfig::default()),
    }
}

/// Load configuration from an explicit file; it must exist.
pub fn load_from(path: &Path) -> Result<LevelHashConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LevelHashConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
