//! Error types for skytone

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for skytone
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme state was requested outside of a provider scope.
    #[error("use_theme must be used within a ThemeProvider")]
    OutsideProvider,

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("Unknown background effect: {0:?}")]
    UnknownEffect(String),

    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from a preference store
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preference file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from loading or validating a [`ThemeConfig`](crate::ThemeConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid day bands: expected light < dusk < dark < 24, got {light}/{dusk}/{dark}")]
    InvalidBands { light: u32, dusk: u32, dark: u32 },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Result alias for skytone operations
pub type Result<T> = std::result::Result<T, ThemeError>;
