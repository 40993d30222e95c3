//! Tinct configuration file handling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tinct_theme::{SyncConfig, ThemeMode};

pub const CONFIG_FILE: &str = "tinct.toml";

/// Top-level configuration (tinct.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TinctConfig {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Values used when a command does not specify them
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Preset id
    #[serde(default)]
    pub preset: Option<String>,
    /// Theme file, relative to the config file
    #[serde(default)]
    pub theme: Option<PathBuf>,
    #[serde(default)]
    pub mode: Option<ThemeMode>,
}

impl TinctConfig {
    /// Load an explicit config file, or `./tinct.toml` if it exists.
    ///
    /// With neither, defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: TinctConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let (Some(theme), Some(dir)) = (config.defaults.theme.as_mut(), path.parent()) {
            if theme.is_relative() {
                *theme = dir.join(&*theme);
            }
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sync_and_defaults() {
        let config: TinctConfig = toml::from_str(
            r#"
            [sync]
            dark_class = "theme-dark"

            [defaults]
            preset = "blue"
            mode = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.sync.dark_class, "theme-dark");
        assert_eq!(config.defaults.preset.as_deref(), Some("blue"));
        assert_eq!(config.defaults.mode, Some(ThemeMode::Dark));
    }

    #[test]
    fn empty_file_is_default() {
        let config: TinctConfig = toml::from_str("").unwrap();
        assert_eq!(config.sync, SyncConfig::default());
        assert!(config.defaults.theme.is_none());
    }
}
