//! # CLI Surface and Command Dispatch
//!
//! The decision layer of the canonfmt binary. Raw process arguments come in
//! one end; exactly one terminal action runs out the other:
//!
//! 1. print the version
//! 2. print usage (general, or detailed for one option)
//! 3. print support metadata
//! 4. resolve a config path
//! 5. report file info
//! 6. format standard input
//! 7. format a set of files
//! 8. fall back to the usage text with a failing exit status
//!
//! Before any action runs, mutually exclusive flag combinations are
//! rejected in a fixed order, and the logger is bootstrapped in two phases:
//! a default-level logger exists from the first instruction so that even
//! argument-parsing errors have somewhere to go, then `--loglevel` (scanned
//! tolerantly from the raw tokens, before full parsing) and the hidden
//! diagnostics flag can each replace it once. After that the logger
//! reference is fixed for the run.
//!
//! Everything here deals in `anyhow` message errors; the single recovery
//! point is [`run`], which logs the message at error severity and maps it
//! to exit status 1. clap's own usage errors (unknown flag, missing value)
//! keep their conventional exit status 2.

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use canonfmt::language::Language;
use canonfmt::logger::{LogLevel, Logger};
use canonfmt::output::OutputConfig;

use crate::commands;

/// Normalized command-line options.
///
/// There are no subcommands: mode selection is the dispatcher's job, and
/// clap's automatic `--help`/`--version` handling is disabled so both flags
/// take part in the documented priority order.
#[derive(Parser, Debug)]
#[command(name = "canonfmt")]
#[command(about = "Canonical formatter for JSON, YAML and TOML", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Glob patterns naming the files to format
    #[arg(value_name = "PATTERNS")]
    pub file_patterns: Vec<String>,

    /// Print canonfmt version
    #[arg(long)]
    pub version: bool,

    /// Print usage information, or detailed usage for a single option
    #[arg(short = 'h', long, value_name = "TOPIC", num_args = 0..=1)]
    pub help: Option<Option<String>>,

    /// Print support information (languages, options) as JSON
    #[arg(long)]
    pub support_info: bool,

    /// Find and print the configuration file that applies to the given path
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".")]
    pub find_config_path: Option<PathBuf>,

    /// Print information about how a given file would be processed
    #[arg(long, value_name = "PATH")]
    pub file_info: Option<PathBuf>,

    /// Check if the given files are formatted, with a human-friendly summary
    #[arg(short = 'c', long)]
    pub check: bool,

    /// Print the names of files whose formatting differs from canonfmt's
    #[arg(short = 'l', long)]
    pub list_different: bool,

    /// Edit files in-place (beware!)
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Verify that canonfmt's output is stable when formatted again
    #[arg(long)]
    pub debug_check: bool,

    /// Repeat formatting N extra times and report timings (forces debug logs)
    #[arg(long, value_name = "N", default_value_t = 0, hide = true)]
    pub debug_repeat: u32,

    /// What level of logs to report
    #[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Log)]
    pub loglevel: LogLevel,

    /// Which parser to use
    #[arg(long, value_enum, value_name = "LANGUAGE")]
    pub parser: Option<Language>,

    /// Path to the file that stdin should be treated as coming from
    #[arg(long, value_name = "PATH")]
    pub stdin_filepath: Option<PathBuf>,

    /// Path to a canonfmt configuration file
    #[arg(long, value_name = "PATH", env = "CANONFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not look for a configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Number of spaces per indentation level
    #[arg(long, value_name = "N")]
    pub tab_width: Option<usize>,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub use_tabs: bool,

    /// The line length where canonfmt will try to wrap (TOML only)
    #[arg(long, value_name = "N")]
    pub print_width: Option<usize>,

    /// Custom directory that contains canonfmt plugins
    #[arg(long, value_name = "DIR")]
    pub plugin_search_dir: Vec<PathBuf>,

    /// Disable plugin autoloading
    #[arg(long)]
    pub no_plugin_search: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

/// Normalized run state for one process execution.
///
/// Constructed exactly once per run. `logger` is reassigned at most twice
/// during bootstrap (see [`run`]) and fixed afterwards; handlers receive it
/// through the context rather than reading any global.
pub struct Context {
    pub raw_arguments: Vec<OsString>,
    pub argv: Cli,
    pub file_patterns: Vec<String>,
    pub logger: Logger,
}

impl Context {
    /// Full-parse the raw arguments and bundle the run state.
    ///
    /// clap usage errors print their own message and exit with status 2
    /// before a Context exists.
    fn new(raw_arguments: &[OsString], logger: &Logger) -> Self {
        let argv = Cli::parse_from(
            std::iter::once(OsString::from("canonfmt")).chain(raw_arguments.iter().cloned()),
        );
        // Same level as before, but styling can now honor --color.
        let logger = Logger::new(logger.level(), OutputConfig::from_env_and_flag(&argv.color));
        let file_patterns = argv.file_patterns.clone();

        Self {
            raw_arguments: raw_arguments.to_vec(),
            argv,
            file_patterns,
            logger,
        }
    }

    /// True when a diagnostics flag asks for maximum verbosity regardless
    /// of `--loglevel`.
    pub fn forces_debug_logging(&self) -> bool {
        self.argv.debug_repeat > 0
    }

    fn has_raw_plugin_search_dir(&self) -> bool {
        has_plugin_search_dir_token(&self.raw_arguments)
    }
}

/// Run the CLI: bootstrap the logger, build the context, dispatch, and
/// funnel every failure through the one recovery point.
pub fn run(raw_arguments: &[OsString]) -> ExitCode {
    // Default-level logger first, so errors during --loglevel handling are
    // still reported.
    let mut logger = Logger::default();

    match try_run(raw_arguments, &mut logger) {
        Ok(code) => code,
        Err(error) => {
            logger.error(&format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}

fn try_run(raw_arguments: &[OsString], logger: &mut Logger) -> Result<ExitCode> {
    if let Some(level) = log_level_from_raw(raw_arguments)? {
        if level != logger.level() {
            *logger = Logger::new(level, OutputConfig::default());
        }
    }

    let mut context = Context::new(raw_arguments, logger);
    *logger = context.logger.clone();

    if context.logger.level() != LogLevel::Debug && context.forces_debug_logging() {
        context.logger = Logger::new(
            LogLevel::Debug,
            OutputConfig::from_env_and_flag(&context.argv.color),
        );
        *logger = context.logger.clone();
    }

    dispatch(&context)
}

/// Reject invalid flag combinations, in a fixed order. The first violated
/// rule wins; nothing below it is evaluated and no handler runs.
fn validate(context: &Context) -> Result<()> {
    if context.argv.no_plugin_search && context.has_raw_plugin_search_dir() {
        bail!("Cannot use --no-plugin-search and --plugin-search-dir together.");
    }

    if context.argv.check && context.argv.list_different {
        bail!("Cannot use --check and --list-different together.");
    }

    if context.argv.write && context.argv.debug_check {
        bail!("Cannot use --write and --debug-check together.");
    }

    if context.argv.find_config_path.is_some() && !context.file_patterns.is_empty() {
        bail!("Cannot use --find-config-path with multiple files");
    }

    if context.argv.file_info.is_some() && !context.file_patterns.is_empty() {
        bail!("Cannot use --file-info with multiple files");
    }

    Ok(())
}

/// Select and run exactly one terminal action. First match wins.
fn dispatch(context: &Context) -> Result<ExitCode> {
    context
        .logger
        .debug(&format!("normalized argv: {:?}", context.argv));

    validate(context)?;

    let argv = &context.argv;

    if argv.version {
        println!("{}", clap::crate_version!());
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(topic) = &argv.help {
        let text = match topic.as_deref() {
            Some(topic) if !topic.is_empty() => commands::usage::detailed(topic)?,
            _ => commands::usage::general(),
        };
        print!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    if argv.support_info {
        return commands::support::execute(context);
    }

    let has_file_patterns = !context.file_patterns.is_empty();
    let use_stdin = selects_stdin(
        has_file_patterns,
        std::io::stdin().is_terminal(),
        argv.stdin_filepath.is_some(),
    );

    if let Some(target) = &argv.find_config_path {
        commands::find_config_path::execute(context, target)
    } else if let Some(path) = &argv.file_info {
        commands::file_info::execute(context, path)
    } else if use_stdin {
        commands::stdin::execute(context)
    } else if has_file_patterns {
        commands::files::execute(context)
    } else {
        // Not an error: an interactive terminal with no inputs gets the
        // usage text and a failing status.
        print!("{}", commands::usage::general());
        Ok(ExitCode::FAILURE)
    }
}

/// Stdin mode applies when no file patterns were given and either stdin is
/// not an interactive terminal (piped input) or the caller explicitly
/// claimed stdin with `--stdin-filepath`.
fn selects_stdin(has_file_patterns: bool, stdin_is_tty: bool, has_filepath_override: bool) -> bool {
    !has_file_patterns && (!stdin_is_tty || has_filepath_override)
}

/// Narrow, tolerant scan of the raw arguments for `--loglevel`.
///
/// Runs before the full clap parse so the requested verbosity applies even
/// when the rest of argv is invalid. Unrelated tokens, malformed or not,
/// are ignored; the last occurrence wins. An unknown level value is an
/// error (reported through the default-level logger by [`run`]).
fn log_level_from_raw(raw_arguments: &[OsString]) -> Result<Option<LogLevel>> {
    let mut found = None;
    let mut tokens = raw_arguments.iter();

    while let Some(token) = tokens.next() {
        let Some(token) = token.to_str() else { continue };

        let value = if token == "--loglevel" {
            match tokens.next().and_then(|next| next.to_str()) {
                // A flag-shaped token is not a value; the full parse
                // reports the missing value itself.
                Some(next) if !next.starts_with('-') => next,
                _ => continue,
            }
        } else if let Some(rest) = token.strip_prefix("--loglevel=") {
            rest
        } else {
            continue;
        };

        found = Some(
            value
                .parse::<LogLevel>()
                .map_err(|message| anyhow::anyhow!(message))?,
        );
    }

    Ok(found)
}

/// Whether a `--plugin-search-dir` value appears in the raw token list.
///
/// Checked against the raw view rather than the normalized options so that
/// later option merging cannot mask an explicitly supplied flag.
fn has_plugin_search_dir_token(raw_arguments: &[OsString]) -> bool {
    raw_arguments.iter().any(|token| {
        token.to_str().is_some_and(|token| {
            token == "--plugin-search-dir" || token.starts_with("--plugin-search-dir=")
        })
    })
}

/// Build a Context straight from string arguments. Test-only: production
/// construction always goes through [`run`].
#[cfg(test)]
pub(crate) fn context_for_tests(args: &[&str]) -> Context {
    let raw: Vec<OsString> = args.iter().map(OsString::from).collect();
    let argv = Cli::try_parse_from(
        std::iter::once(OsString::from("canonfmt")).chain(raw.iter().cloned()),
    )
    .expect("test argv must parse");
    let file_patterns = argv.file_patterns.clone();
    Context {
        raw_arguments: raw,
        argv,
        file_patterns,
        logger: Logger::default(),
    }
}
