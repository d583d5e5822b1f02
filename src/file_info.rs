//! File info reporting, backing the `--file-info` flag.
//!
//! Answers two questions about a path without touching the filesystem:
//! which parser would handle it, and whether the active configuration
//! excludes it. The path does not need to exist; the answers are derived
//! from the name alone, so editors can query virtual buffers.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::language::Language;

/// What canonfmt would do with a given path.
///
/// Serialized as JSON with camelCase keys, e.g.
/// `{ "ignored": false, "inferredParser": "json" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// True when the active config's `exclude` globs match the path.
    pub ignored: bool,
    /// Parser identifier inferred from the file name, if any.
    pub inferred_parser: Option<String>,
}

/// Compute the [`FileInfo`] for `path` under `config`.
///
/// # Errors
///
/// Returns `Error::Glob` if the config carries an invalid exclude pattern.
pub fn file_info(path: &Path, config: Option<&Config>) -> Result<FileInfo> {
    let ignored = match config {
        Some(config) => config.is_excluded(path)?,
        None => false,
    };
    let inferred_parser = Language::infer(path).map(|language| language.parser_name().to_string());

    Ok(FileInfo {
        ignored,
        inferred_parser,
    })
}
