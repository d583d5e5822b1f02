//! TOML formatting backend.
//!
//! Validated with the `toml` crate first, then rewritten with the `taplo`
//! formatter. The validation step matters: `taplo` formats best-effort and
//! would happily pass invalid documents through.

use super::FormatOptions;
use crate::error::Result;

/// Rewrite `input` as canonical TOML.
///
/// # Errors
///
/// Returns `Error::Toml` when `input` is not a valid TOML document.
pub fn format(input: &str, options: &FormatOptions) -> Result<String> {
    input.parse::<toml::Table>()?;

    let format_options = taplo::formatter::Options {
        indent_string: options.indent_unit(),
        column_width: options.print_width,
        reorder_keys: true,
        trailing_newline: true,
        ..Default::default()
    };

    Ok(taplo::formatter::format(input, format_options))
}
