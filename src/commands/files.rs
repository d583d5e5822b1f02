//! The multi-file action: expand glob patterns and format each match.
//!
//! One of four per-file side effects applies, as configured: print to
//! stdout (default), rewrite in place (`--write`), report non-canonical
//! files (`--check` / `--list-different`), or verify the formatter's own
//! output is stable (`--debug-check`). Individual file failures are logged
//! and formatting continues; the run as a whole then exits non-zero.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use canonfmt::engine;
use canonfmt::language::Language;
use canonfmt::suggestions;

use crate::cli::Context;

/// Format every file matched by the positional patterns.
pub fn execute(context: &Context) -> Result<ExitCode> {
    let argv = &context.argv;
    let logger = &context.logger;

    if argv.check {
        logger.log("Checking formatting...");
    }

    let (files, mut failed) = expand_patterns(context)?;
    let mut different = 0usize;

    for path in &files {
        let display = path.display().to_string();

        let Some(language) = Language::infer(path) else {
            logger.warn(&format!(
                "Skipping file with unsupported extension: {}",
                display
            ));
            continue;
        };

        let config = match super::resolved_config(context, path) {
            Ok(config) => config,
            Err(error) => {
                logger.error(&format!("{}: {:#}", display, error));
                failed = true;
                continue;
            }
        };

        if let Some(config) = &config {
            match config.is_excluded(path) {
                Ok(true) => {
                    logger.debug(&format!("{} is excluded by the configuration", display));
                    continue;
                }
                Ok(false) => {}
                Err(error) => {
                    logger.error(&format!("{}: {}", display, error));
                    failed = true;
                    continue;
                }
            }
        }

        let input = match fs::read_to_string(path) {
            Ok(input) => input,
            Err(error) => {
                logger.error(&format!("Unable to read file: {}: {}", display, error));
                failed = true;
                continue;
            }
        };

        let options = super::options_from(argv, config.as_ref());
        let started = Instant::now();
        let formatted = match super::format_with_diagnostics(context, &input, language, &options) {
            Ok(formatted) => formatted,
            Err(error) => {
                logger.error(&format!("{}: {}", display, error));
                failed = true;
                continue;
            }
        };
        let elapsed_ms = started.elapsed().as_millis();

        let changed = formatted != input;

        if argv.write {
            if changed {
                if let Err(error) = fs::write(path, &formatted) {
                    logger.error(&format!("Unable to write file: {}: {}", display, error));
                    failed = true;
                    continue;
                }
                logger.log(&format!("{} {}ms", display, elapsed_ms));
            } else {
                logger.debug(&format!("{} {}ms (unchanged)", display, elapsed_ms));
            }
        } else if argv.check {
            if changed {
                logger.warn(&display);
                different += 1;
            }
        } else if argv.list_different {
            if changed {
                logger.log(&display);
                different += 1;
            }
        } else if argv.debug_check {
            match engine::format_text(&formatted, language, &options) {
                Ok(second) if second == formatted => {}
                Ok(_) => {
                    logger.error(&format!("{}: formatting is not stable", display));
                    failed = true;
                }
                Err(error) => {
                    logger.error(&format!("{}: {}", display, error));
                    failed = true;
                }
            }
        } else {
            print!("{}", formatted);
        }
    }

    if argv.check {
        if different > 0 {
            logger.log(
                "Code style issues found in the above file(s). Run canonfmt with --write to fix.",
            );
        } else if !failed {
            logger.log("All matched files use the canonical style!");
        }
    }

    if failed || ((argv.check || argv.list_different) && different > 0) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Expand the positional glob patterns, preserving pattern order and
/// de-duplicating across overlapping patterns. Returns the matched files
/// plus whether any pattern failed to match.
fn expand_patterns(context: &Context) -> Result<(Vec<PathBuf>, bool)> {
    let logger = &context.logger;
    let mut files = Vec::new();
    let mut seen = HashSet::new();
    let mut failed = false;

    for pattern in &context.file_patterns {
        let entries =
            glob::glob(pattern).map_err(|error| suggestions::invalid_glob(pattern, &error))?;

        let mut matched = false;
        for entry in entries {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    matched = true;
                    if seen.insert(path.clone()) {
                        files.push(path);
                    }
                }
                Err(error) => {
                    logger.error(&format!(
                        "Unable to expand pattern \"{}\": {}",
                        pattern, error
                    ));
                    failed = true;
                }
            }
        }

        if !matched {
            logger.error(&format!(
                "No files matching the pattern were found: \"{}\".",
                pattern
            ));
            failed = true;
        }
    }

    Ok((files, failed))
}
