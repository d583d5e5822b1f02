//! # Canonfmt Library
//!
//! This library provides the core functionality for the `canonfmt`
//! command-line tool: a canonical formatter for JSON, YAML and TOML. It is
//! designed to be used by the CLI but can also be embedded in other
//! applications that want deterministic rewriting of structured text.
//!
//! ## Quick Example
//!
//! ```
//! use canonfmt::engine::{self, FormatOptions};
//! use canonfmt::language::Language;
//!
//! let options = FormatOptions::default();
//! let formatted = engine::format_text("{\"b\":2,\"a\":1}", Language::Json, &options).unwrap();
//! assert_eq!(formatted, "{\n  \"a\": 1,\n  \"b\": 2\n}\n");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key pieces:
//!
//! - **Engine (`engine`)**: parses input in one of the supported languages
//!   and re-emits it in a single canonical style: sorted keys, configured
//!   indentation, exactly one trailing newline.
//! - **Language (`language`)**: maps file names to formatting backends.
//! - **Configuration (`config`)**: the `.canonfmt.toml` schema and the
//!   upward discovery walk that finds the file applying to a given input.
//! - **Logger (`logger`)**: a leveled message sink owned by the invocation
//!   context; the CLI replaces it (never mutates it) while bootstrapping.
//! - **Reports (`file_info`, `support`)**: structural descriptions consumed
//!   by the `--file-info` and `--support-info` flags, both serialized back
//!   through the engine's JSON mode.
//!
//! The command dispatcher itself (flag validation, mode selection, exit
//! codes) lives in the binary (`src/cli.rs`), keeping this library free of
//! process-level concerns.

pub mod config;
pub mod engine;
pub mod error;
pub mod file_info;
pub mod language;
pub mod logger;
pub mod output;
pub mod suggestions;
pub mod support;

#[cfg(test)]
mod engine_proptest;
