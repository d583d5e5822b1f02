//! # Formatting Engine
//!
//! The engine takes source text in one of the supported languages and
//! rewrites it in canonfmt's canonical style: parsed into the language's
//! data model, then re-emitted deterministically. Canonical means the same
//! data always produces the same bytes: map keys are sorted, indentation
//! and spacing follow [`FormatOptions`], and output always ends with a
//! single trailing newline.
//!
//! Each language lives in its own submodule with its own backend:
//!
//! - [`json`]: `serde_json` with a custom indent
//! - [`yaml`]: `serde_yaml` (fixed two-space indent; the emitter is not
//!   configurable)
//! - [`toml`]: validated with `toml`, formatted with `taplo`
//!
//! The engine performs no I/O and never looks at file names; callers decide
//! the language (see `Language::infer`).

pub mod json;
pub mod toml;
pub mod yaml;

use crate::config::Config;
use crate::error::Result;
use crate::language::Language;

/// Options controlling the emitted style.
///
/// Resolved per run from defaults, then the discovered or explicit config
/// file, then CLI flags. Later sources win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces per indentation level.
    pub tab_width: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
    /// Preferred maximum line width, where the backend supports reflowing.
    pub print_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            tab_width: config.tab_width,
            use_tabs: config.use_tabs,
            print_width: config.print_width,
        }
    }
}

impl FormatOptions {
    /// Options taken straight from a config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            tab_width: config.tab_width,
            use_tabs: config.use_tabs,
            print_width: config.print_width,
        }
    }

    /// The string used for one level of indentation.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}

/// Format `input` as `language`, returning the canonical text.
///
/// # Errors
///
/// Returns the language backend's parse error when `input` is not valid
/// source for that language.
pub fn format_text(input: &str, language: Language, options: &FormatOptions) -> Result<String> {
    match language {
        Language::Json => json::format(input, options),
        Language::Yaml => yaml::format(input),
        Language::Toml => toml::format(input, options),
    }
}
