//! # Leveled Logger
//!
//! The message sink used by the CLI. A [`Logger`] is an owned value carried
//! on the invocation context rather than a process-global: during startup it
//! is *replaced* (never mutated) at most twice, once when `--loglevel`
//! differs from the default and once more when a diagnostics flag forces
//! `debug`, and is then fixed for the rest of the run.
//!
//! Severities follow a five-step scale, from least to most verbose:
//! `silent < error < warn < log < debug`. Messages at `log` severity are
//! plain and go to stdout (they are part of the tool's regular output);
//! `debug`, `warn` and `error` messages are prefixed, styled and written to
//! stderr.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use console::Style;

use crate::output::OutputConfig;

/// Verbosity level of a [`Logger`].
///
/// Variants are ordered so that a more verbose level compares greater:
/// a logger emits a message when its own level is `>=` the severity
/// required by the emission method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Suppress all messages, including errors.
    Silent,
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings and regular output.
    Log,
    /// Everything, including internal diagnostics.
    Debug,
}

impl LogLevel {
    /// All level names as accepted on the command line.
    pub fn names() -> [&'static str; 5] {
        ["silent", "error", "warn", "log", "debug"]
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Log
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Log => "log",
            LogLevel::Debug => "debug",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "log" => Ok(LogLevel::Log),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!(
                "Invalid --loglevel value. Expected silent, error, warn, log or debug, but received \"{}\".",
                other
            )),
        }
    }
}

/// A leveled message sink.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output: OutputConfig,
}

impl Logger {
    /// Create a logger at the given level with the given output styling.
    pub fn new(level: LogLevel, output: OutputConfig) -> Self {
        Self { level, output }
    }

    /// The logger's current level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Emit an internal diagnostic message.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Debug {
            eprintln!("{} {}", self.prefix(&Style::new().blue(), "[debug]"), message);
        }
    }

    /// Emit a regular output message (stdout, unprefixed).
    pub fn log(&self, message: &str) {
        if self.level >= LogLevel::Log {
            println!("{}", message);
        }
    }

    /// Emit a warning.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Warn {
            eprintln!("{} {}", self.prefix(&Style::new().yellow(), "[warn]"), message);
        }
    }

    /// Emit an error.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Error {
            eprintln!("{} {}", self.prefix(&Style::new().red(), "[error]"), message);
        }
    }

    fn prefix(&self, style: &Style, tag: &str) -> String {
        self.output.paint(style, tag)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default(), OutputConfig::default())
    }
}
