use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Display settings; computation never rounds through these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Decimal places for approximate values in command output.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Root index the workbench opens with (2–6).
    #[serde(default = "default_root_index")]
    pub default_root_index: u32,
}

fn default_precision() -> usize {
    4
}

fn default_root_index() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: default_precision(), default_root_index: default_root_index() }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.calcforge\config.toml on Windows; ~/.calcforge/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".calcforge").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Loads the resolved config file, falling back to defaults when it does not
/// exist. A file that exists but fails to parse is an error.
pub fn load(cli_path: &Option<PathBuf>) -> Result<Config> {
    let Some(path) = resolve_config_path(cli_path) else {
        return Ok(Config::default());
    };
    load_from(&path)
}

fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.precision, 4);
        assert_eq!(cfg.default_root_index, 2);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("precision = 2").unwrap();
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.default_root_index, 2);
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "precision = \"lots\"").unwrap();
        assert!(load_from(&path).is_err());
    }
}
