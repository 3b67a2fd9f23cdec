pub mod config;
pub mod logging;

pub mod digest;
pub mod error;
pub mod package;
