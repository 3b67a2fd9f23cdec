//! `levelhash config` – show where configuration lives and what it says.

use anyhow::Result;
use levelhash_core::config::LevelHashConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &LevelHashConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
