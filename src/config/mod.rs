//! Configuration loading and merging
//!
//! Defaults come from an optional config file; environment variables and CLI
//! flags override them (CLI > Env > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides, Settings};
