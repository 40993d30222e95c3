//! Synchronization settings
//!
//! Loaded from TOML. Every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! dark_class = "dark"
//!
//! [fallbacks]
//! color = "oklch(0.5000 0.0000 0.0000)"
//! length = "0px"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::tokens::SANS_STACK;

/// Engine settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Flag set on the style target while the dark mode is active
    pub dark_class: String,
    pub fallbacks: Fallbacks,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            dark_class: default_dark_class(),
            fallbacks: Fallbacks::default(),
        }
    }
}

fn default_dark_class() -> String {
    "dark".to_string()
}

/// Strings written in place of a value that is missing or cannot be rendered
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub color: String,
    pub font_family: String,
    pub length: String,
    pub shadow: String,
    pub number: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            color: "oklch(0.5000 0.0000 0.0000)".to_string(),
            font_family: SANS_STACK.to_string(),
            length: "0px".to_string(),
            shadow: "none".to_string(),
            number: "normal".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(SyncConfig::from_toml_str("").unwrap(), SyncConfig::default());
    }

    #[test]
    fn partial_fallback_table() {
        let config = SyncConfig::from_toml_str(
            r#"
            dark_class = "theme-dark"

            [fallbacks]
            length = "1px"
            "#,
        )
        .unwrap();
        assert_eq!(config.dark_class, "theme-dark");
        assert_eq!(config.fallbacks.length, "1px");
        assert_eq!(config.fallbacks.shadow, "none");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            SyncConfig::from_toml_str("dark_class = 3"),
            Err(ThemeError::Config(_))
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = SyncConfig {
            dark_class: "night".into(),
            ..SyncConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(SyncConfig::from_toml_str(&text).unwrap(), config);
    }
}
