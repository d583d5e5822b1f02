//! # CLI Command Implementations
//!
//! This module contains the implementation for each terminal action the
//! dispatcher can select. Each action lives in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module exposes an `execute` function taking the invocation
//! [`Context`](crate::cli::Context) (plus the flag's value, where the flag
//! carries one) and returning the exit code for the run, or an error that
//! the dispatcher's single recovery point reports.
//!
//! Shared concerns live here so the stdin and multi-file paths stay
//! consistent: resolving the configuration that applies to an input, and
//! running the engine with optional timing diagnostics.

pub mod file_info;
pub mod files;
pub mod find_config_path;
pub mod stdin;
pub mod support;
pub mod usage;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use canonfmt::config::{self, Config};
use canonfmt::engine::{self, FormatOptions};
use canonfmt::language::Language;

use crate::cli::{Cli, Context};

/// Resolve the configuration that applies to `start` (a file path or a
/// directory), honoring `--config` and `--no-config`.
pub(crate) fn resolved_config(context: &Context, start: &Path) -> Result<Option<Config>> {
    if context.argv.no_config {
        return Ok(None);
    }

    if let Some(path) = &context.argv.config {
        return Ok(Some(Config::from_file(path)?));
    }

    match config::find_config_path(start)? {
        Some(path) => {
            context
                .logger
                .debug(&format!("loaded configuration from {}", path.display()));
            Ok(Some(Config::from_file(&path)?))
        }
        None => Ok(None),
    }
}

/// Formatting options for one input: defaults, then the config file, then
/// explicit flags. Later sources win.
pub(crate) fn options_from(argv: &Cli, config: Option<&Config>) -> FormatOptions {
    let mut options = match config {
        Some(config) => FormatOptions::from_config(config),
        None => FormatOptions::default(),
    };

    if let Some(tab_width) = argv.tab_width {
        options.tab_width = tab_width;
    }
    if argv.use_tabs {
        options.use_tabs = true;
    }
    if let Some(print_width) = argv.print_width {
        options.print_width = print_width;
    }

    options
}

/// Resolve config and options for `start` in one step.
pub(crate) fn resolved_options(context: &Context, start: &Path) -> Result<FormatOptions> {
    let config = resolved_config(context, start)?;
    Ok(options_from(&context.argv, config.as_ref()))
}

/// Run the engine once for real, then `--debug-repeat` extra times with
/// per-iteration timing at debug level.
pub(crate) fn format_with_diagnostics(
    context: &Context,
    input: &str,
    language: Language,
    options: &FormatOptions,
) -> canonfmt::error::Result<String> {
    let started = Instant::now();
    let formatted = engine::format_text(input, language, options)?;
    context.logger.debug(&format!(
        "formatted {} input in {}ms",
        language.parser_name(),
        started.elapsed().as_millis()
    ));

    for iteration in 0..context.argv.debug_repeat {
        let started = Instant::now();
        engine::format_text(input, language, options)?;
        context.logger.debug(&format!(
            "debug-repeat {}: {}ms",
            iteration + 1,
            started.elapsed().as_millis()
        ));
    }

    Ok(formatted)
}
