//! # Language Detection
//!
//! Maps file names to the structured formats canonfmt can rewrite. The
//! dispatcher never guesses: stdin needs either `--parser` or a
//! `--stdin-filepath` with a recognized extension, and files with unknown
//! extensions are skipped with a warning.

use std::path::Path;

use clap::ValueEnum;

/// An input language the formatting engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Json,
    Yaml,
    Toml,
}

impl Language {
    /// All supported languages, in the order they are reported by
    /// `--support-info`.
    pub fn all() -> [Language; 3] {
        [Language::Json, Language::Yaml, Language::Toml]
    }

    /// The parser identifier, as accepted by `--parser` and reported by
    /// `--file-info`.
    pub fn parser_name(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Toml => "toml",
        }
    }

    /// Human-readable language name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
        }
    }

    /// File extensions (without the leading dot) that map to this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Json => &["json"],
            Language::Yaml => &["yaml", "yml"],
            Language::Toml => &["toml"],
        }
    }

    /// Infer the language from a file path's extension.
    ///
    /// Matching is case-insensitive. Returns `None` for paths without an
    /// extension or with an unrecognized one.
    pub fn infer(path: &Path) -> Option<Language> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        Language::all()
            .into_iter()
            .find(|language| language.extensions().contains(&extension.as_str()))
    }
}
