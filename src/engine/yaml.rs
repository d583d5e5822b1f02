//! YAML formatting backend.
//!
//! Parses with `serde_yaml`, recursively sorts mapping keys, and re-emits.
//! The `serde_yaml` emitter uses a fixed two-space indent and does not
//! expose style options, so [`FormatOptions`](super::FormatOptions) does
//! not apply here.

use serde_yaml::Value;

use crate::error::Result;

/// Rewrite `input` as canonical YAML.
///
/// # Errors
///
/// Returns `Error::Yaml` when `input` is not a single valid YAML document.
pub fn format(input: &str) -> Result<String> {
    let value: Value = serde_yaml::from_str(input)?;
    let mut out = serde_yaml::to_string(&canonicalize(value))?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Sort mapping keys recursively so equal documents emit equal bytes.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(Value, Value)> = mapping
                .into_iter()
                .map(|(key, value)| (canonicalize(key), canonicalize(value)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| key_ordinal(a).cmp(&key_ordinal(b)));
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(sequence) => {
            Value::Sequence(sequence.into_iter().map(canonicalize).collect())
        }
        other => other,
    }
}

/// A sortable rendition of a mapping key. Keys are usually strings; anything
/// else falls back to its serialized form.
fn key_ordinal(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default(),
    }
}
