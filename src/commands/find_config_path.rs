//! The `--find-config-path` action: report which configuration file
//! applies to a given input.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use canonfmt::config;
use canonfmt::suggestions;

use crate::cli::Context;

/// Resolve the nearest configuration file for `target` and print its path,
/// relative to the working directory when it lies below it.
pub fn execute(context: &Context, target: &Path) -> Result<ExitCode> {
    context
        .logger
        .debug(&format!("resolving configuration for {}", target.display()));

    match config::find_config_path(target)? {
        Some(path) => {
            let display = env::current_dir()
                .ok()
                .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
                .unwrap_or_else(|| path.clone());
            println!("{}", display.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Err(suggestions::config_not_found(target)),
    }
}
