//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Jenkins URL is required. Set JENKINS_URL, pass --url, or configure a profile.")]
    MissingBaseUrl,

    #[error("Authentication configuration is required (username and API token)")]
    MissingAuth,

    #[error("Unable to determine config directory")]
    ConfigDirUnavailable,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile '{0}' not found in config file")]
    ProfileNotFound(String),

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
