//! # Configuration Schema and Discovery
//!
//! This module defines the data structures that represent a `.canonfmt.toml`
//! configuration file, the logic for parsing it, and the upward search used
//! to locate the file that applies to a given input.
//!
//! ## Key Components
//!
//! - **`Config`**: the typed configuration, formatting options plus a list
//!   of `exclude` glob patterns naming files canonfmt should leave alone.
//!
//! - **`find_config_path`**: walks from a start path up through its parent
//!   directories looking for `.canonfmt.toml` or `canonfmt.toml`, falling
//!   back to the platform config directory (`~/.config/canonfmt/` on
//!   Linux). This is also what `--find-config-path` reports.
//!
//! ## Resolution
//!
//! Discovery and parsing are separate steps on purpose: `--find-config-path`
//! only needs the former, and an explicitly passed `--config <path>` skips
//! discovery entirely while still going through [`Config::from_file`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File names recognized during config discovery, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".canonfmt.toml", "canonfmt.toml"];

/// A parsed `.canonfmt.toml` configuration file.
///
/// Every field is optional in the file; missing fields take the defaults
/// below. Unknown fields are rejected so typos surface as parse errors
/// instead of being silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of spaces per indentation level.
    pub tab_width: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
    /// Preferred maximum line width, where the backend supports reflowing.
    pub print_width: usize,
    /// Glob patterns naming files that should not be formatted.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 2,
            use_tabs: false,
            print_width: 80,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `Error::ConfigParse` if its contents are not a valid config table.
    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::ConfigParse {
            message: format!("{}: {}", path.display(), e.message()),
            hint: Some("supported keys are tab_width, use_tabs, print_width and exclude".to_string()),
        })
    }

    /// Whether `path` matches any of the config's `exclude` globs.
    ///
    /// Both the full (relative) path and the bare file name are tried, so
    /// `exclude = ["*.lock.json"]` works regardless of directory depth.
    ///
    /// # Errors
    ///
    /// Returns `Error::Glob` if an exclude pattern is not valid glob syntax.
    pub fn is_excluded(&self, path: &Path) -> Result<bool> {
        for raw in &self.exclude {
            let pattern = Pattern::new(raw)?;
            if pattern.matches_path(path) {
                return Ok(true);
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if pattern.matches(name) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Find the configuration file that applies to `start`.
///
/// `start` may name a file (existing or not; stdin gets a virtual path) or
/// a directory. The search begins in the containing directory and walks up
/// to the filesystem root, checking [`CONFIG_FILE_NAMES`] at each level.
/// When nothing is found, the platform config directory is consulted as a
/// last resort.
///
/// Returns `Ok(None)` when no config file exists anywhere on the chain.
///
/// # Errors
///
/// Returns `Error::Io` when the working directory is unavailable (needed to
/// absolutize a relative `start`).
pub fn find_config_path(start: &Path) -> Result<Option<PathBuf>> {
    let absolute = if start.is_absolute() {
        start.to_path_buf()
    } else {
        env::current_dir()?.join(start)
    };

    let mut dir = if absolute.is_dir() {
        absolute.as_path()
    } else {
        absolute.parent().unwrap_or(Path::new("/"))
    };

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    // Last resort: the user-level config directory.
    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("canonfmt").join("canonfmt.toml");
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
