//! # Canonfmt CLI
//!
//! This is the binary entry point for the `canonfmt` command-line tool.
//!
//! Its primary responsibilities are:
//! - Collecting the raw process arguments.
//! - Handing them to the dispatcher in `cli`, which bootstraps the logger,
//!   validates flag combinations and selects exactly one terminal action.
//! - Converting the dispatcher's outcome into the process exit status.
//!
//! The core formatting logic is defined in the `canonfmt` library crate;
//! the binary is a thin wrapper around the dispatch layer.

mod cli;
mod commands;

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let raw_arguments: Vec<OsString> = env::args_os().skip(1).collect();
    cli::run(&raw_arguments)
}
