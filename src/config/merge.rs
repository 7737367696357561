//! Merging CLI/env overrides on top of file config.

use crate::domain::{Config, OutputFormat};

/// Values supplied on the command line or through the environment.
/// `None` means "not given", so the config file value stays.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<usize>,
    pub format: Option<OutputFormat>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub model: String,
    pub max_tokens: usize,
    pub format: OutputFormat,
}

pub fn merge_cli_with_config(config: Config, cli: CliOverrides) -> Settings {
    Settings {
        model: cli.model.unwrap_or(config.model),
        max_tokens: cli.max_tokens.unwrap_or(config.max_tokens),
        format: cli.format.unwrap_or(config.format),
    }
}
