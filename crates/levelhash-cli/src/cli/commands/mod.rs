//! CLI command handlers. Each command is in its own file.

mod config;
mod hash;

pub use config::run_config;
pub use hash::run_hash;
