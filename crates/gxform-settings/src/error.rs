//! Errors raised while reading or writing a config file, or while checking
//! the parameters and paths of a job before it runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Config file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file exists but could not be read.
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be written.
    #[error("Cannot write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory holding the config file could not be created.
    #[error("Cannot create config directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON, or a value JSON cannot represent.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML.
    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value TOML cannot represent.
    #[error("TOML error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file parsed but its contents are unusable.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration and parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A parameter value is outside its allowed range.
    #[error("Value out of range for '{key}': {value} (valid: {min}..={max})")]
    ValueOutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is NaN or infinite.
    #[error("Value for '{key}' must be a finite number")]
    NonFinite { key: String },

    /// A range definition is unusable (non-finite bounds, or min above max).
    #[error("Invalid range for '{key}': {reason}")]
    InvalidRange { key: String, reason: String },

    /// A required file path was not supplied.
    #[error("Please select an {0} file")]
    MissingPath(String),

    /// The output path would overwrite the input while it is being read.
    #[error("Output file must differ from input file: {0}")]
    SamePath(String),
}

/// Result type alias for config file operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
