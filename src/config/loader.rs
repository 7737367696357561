//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "prompt-gauge";

pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    }
    .and_then(|cfg| validate(cfg, &config_file));

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, accepting either top-level keys or a `[prompt-gauge]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting either top-level keys or a `prompt-gauge` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty file parses as null
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn validate(config: Config, config_file: &Path) -> Result<Config> {
    if config.max_tokens == 0 {
        anyhow::bail!("max_tokens must be at least 1 in {}", config_file.display());
    }
    if config.model.trim().is_empty() {
        anyhow::bail!("model must not be empty in {}", config_file.display());
    }
    Ok(config)
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "prompt-gauge.toml",
        ".prompt-gauge.toml",
        "prompt-gauge.yml",
        ".prompt-gauge.yml",
        "prompt-gauge.yaml",
        ".prompt-gauge.yaml",
    ];

    candidates.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("prompt-gauge.toml"), "model = 'gpt-4'\nmax_tokens = 250\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.model, "gpt-4");
        assert_eq!(cfg.max_tokens, 250);
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".prompt-gauge.toml"),
            "[prompt-gauge]\nmax_tokens = 64\nformat = 'json'\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.max_tokens, 64);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("prompt-gauge.yml"), "prompt-gauge:\n  model: gpt-4o\n")
            .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.max_tokens, 1000);
    }

    #[test]
    fn test_toml_takes_precedence_over_yaml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("prompt-gauge.toml"), "max_tokens = 1\n").expect("write");
        fs::write(tmp.path().join("prompt-gauge.yml"), "max_tokens: 2\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.max_tokens, 1);
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "max_tokens = 'lots'\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_zero_limit_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("zero.toml");
        fs::write(&path, "max_tokens = 0\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("max_tokens must be at least 1"));
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("typo.toml");
        fs::write(&path, "max_token = 10\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.ini");
        fs::write(&path, "max_tokens=10\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("prompt-gauge.toml"), "max_tokens = 'lots'\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_explicit_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");
        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed reading config file"));
    }
}
