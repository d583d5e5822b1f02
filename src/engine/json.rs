//! JSON formatting backend.
//!
//! Parses with `serde_json` and re-serializes through a `PrettyFormatter`
//! carrying the configured indent. `serde_json`'s default map keeps keys in
//! sorted order, which gives the canonical key ordering for free.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::FormatOptions;
use crate::error::Result;

/// Rewrite `input` as canonical JSON.
///
/// # Errors
///
/// Returns `Error::Json` when `input` is not valid JSON.
pub fn format(input: &str, options: &FormatOptions) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;

    let indent = options.indent_unit();
    let mut buffer = Vec::with_capacity(input.len());
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');

    // The serializer only emits valid UTF-8.
    Ok(String::from_utf8(buffer).expect("serde_json output is UTF-8"))
}
