//! The stdin action: format text streamed through standard input.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use canonfmt::language::Language;
use canonfmt::suggestions;

use crate::cli::Context;

/// Read standard input to EOF, format it, and write the result to stdout.
///
/// The language comes from `--parser`, or is inferred from
/// `--stdin-filepath`; with neither there is nothing to go on and the run
/// fails before any input is consumed.
pub fn execute(context: &Context) -> Result<ExitCode> {
    let argv = &context.argv;

    let language = match argv.parser {
        Some(language) => language,
        None => match &argv.stdin_filepath {
            Some(path) => {
                Language::infer(path).ok_or_else(|| suggestions::cannot_infer_parser(path))?
            }
            None => return Err(suggestions::no_parser_for_stdin()),
        },
    };

    // Config discovery starts where the input claims to live.
    let start = argv
        .stdin_filepath
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let options = super::resolved_options(context, &start)?;

    let input = io::read_to_string(io::stdin())?;
    let formatted = super::format_with_diagnostics(context, &input, language, &options)?;

    print!("{}", formatted);
    Ok(ExitCode::SUCCESS)
}
