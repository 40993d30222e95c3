use thiserror::Error;
use tinct_core::ColorParseError;

use crate::theme::ThemeMode;
use crate::tokens::ColorRole;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("{mode} colors are missing required roles: {}", join_roles(.missing))]
    IncompleteTheme {
        mode: ThemeMode,
        missing: Vec<ColorRole>,
    },

    #[error("invalid TOML: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("failed to serialize: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn join_roles(roles: &[ColorRole]) -> String {
    roles
        .iter()
        .map(|role| role.key())
        .collect::<Vec<_>>()
        .join(", ")
}
