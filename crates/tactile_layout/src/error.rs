//! Error types for tactile_layout

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a theme file
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme file could not be read
    #[error("Failed to read theme {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid TOML or does not match the schema
    #[error("Invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
