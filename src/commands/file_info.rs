//! The `--file-info` action: report how a path would be processed.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use canonfmt::engine::{self, FormatOptions};
use canonfmt::file_info;
use canonfmt::language::Language;

use crate::cli::Context;

/// Print `{ "ignored": ..., "inferredParser": ... }` for `target`,
/// serialized through the engine's JSON mode.
///
/// The path does not need to exist: everything is derived from the name
/// and the active configuration.
pub fn execute(context: &Context, target: &Path) -> Result<ExitCode> {
    let config = super::resolved_config(context, target)?;
    let info = file_info::file_info(target, config.as_ref())?;

    let raw = serde_json::to_string(&info)?;
    let formatted = engine::format_text(&raw, Language::Json, &FormatOptions::default())?;

    print!("{}", formatted);
    Ok(ExitCode::SUCCESS)
}
