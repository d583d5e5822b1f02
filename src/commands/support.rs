//! The `--support-info` action: print capability metadata.

use std::process::ExitCode;

use anyhow::Result;

use canonfmt::engine::{self, FormatOptions};
use canonfmt::language::Language;
use canonfmt::support;

use crate::cli::Context;

/// Serialize the capability report through the engine's own JSON mode and
/// print it. Using the engine here keeps the report canonical by
/// construction.
pub fn execute(context: &Context) -> Result<ExitCode> {
    context.logger.debug("collecting support information");

    let info = support::support_info(clap::crate_version!());
    let raw = serde_json::to_string(&info)?;
    let formatted = engine::format_text(&raw, Language::Json, &FormatOptions::default())?;

    print!("{}", formatted);
    Ok(ExitCode::SUCCESS)
}
