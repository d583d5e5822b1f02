//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `canonfmt` library. It uses the `thiserror` library to create an `Error`
//! enum covering the failure modes of the subsystems that sit behind the
//! command dispatcher: configuration loading, file-pattern expansion, and
//! the per-language formatting backends.
//!
//! The dispatcher and the command handlers (binary side) deal in
//! `anyhow::Error` message strings only; these typed variants exist so the
//! library surfaces keep their error context when embedded elsewhere.

use thiserror::Error;

/// Main error type for canonfmt operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing a `.canonfmt.toml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
