//! CLI for levelhash.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use levelhash_core::config::{self, LevelHashConfig};
use std::path::{Path, PathBuf};

use commands::{run_config, run_hash};

/// Top-level CLI for levelhash.
#[derive(Debug, Parser)]
#[command(name = "levelhash")]
#[command(about = "levelhash: content hash of a custom level package", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the SHA-1 content hash of a level directory.
    Hash {
        /// Level directory (overrides base_path from config).
        base: Option<PathBuf>,

        /// File to hash, relative to the level directory. Repeat to list several, in order.
        /// Replaces the configured list.
        #[arg(long = "file", value_name = "NAME")]
        files: Vec<PathBuf>,

        /// Read configuration from this file instead of the default location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Show the config file location and the effective configuration.
    Config {
        /// Read configuration from this file instead of the default location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Explicit config file if given (must exist), else whatever is at the XDG location.
/// Never creates anything, so hashing has no side effects on disk.
fn load_config(path: Option<&Path>) -> Result<LevelHashConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_default(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Hash {
                base,
                files,
                config: config_file,
            } => {
                let cfg = load_config(config_file.as_deref())?;
                run_hash(&cfg, base, files)?;
            }
            CliCommand::Config {
                config: config_file,
            } => {
                let (path, cfg) = match config_file {
                    Some(p) => {
                        let cfg = config::load_from(&p)?;
                        (p, cfg)
                    }
                    None => (config::config_path()?, config::load_or_init()?),
                };
                run_config(&path, &cfg)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
