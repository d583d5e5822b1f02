//! Capability metadata, backing the `--support-info` flag.
//!
//! Builds a structural description of what this build of canonfmt can do:
//! the supported languages with their parser identifiers and extensions,
//! and the exposed formatting options with their defaults. The dispatcher
//! serializes the value through the engine's own JSON mode, so the report
//! doubles as a smoke test of the formatter.

use serde_json::{json, Value};

use crate::config::Config;
use crate::language::Language;

/// Build the support-info document.
///
/// The result is deterministic: `serde_json`'s map keeps keys sorted and
/// the language/option arrays are emitted in a fixed order.
pub fn support_info(version: &str) -> Value {
    let defaults = Config::default();

    let languages: Vec<Value> = Language::all()
        .iter()
        .map(|language| {
            json!({
                "name": language.display_name(),
                "parser": language.parser_name(),
                "extensions": language.extensions(),
            })
        })
        .collect();

    let options = json!([
        {
            "name": "tab_width",
            "type": "int",
            "default": defaults.tab_width,
        },
        {
            "name": "use_tabs",
            "type": "boolean",
            "default": defaults.use_tabs,
        },
        {
            "name": "print_width",
            "type": "int",
            "default": defaults.print_width,
        },
    ]);

    json!({
        "version": version,
        "languages": languages,
        "options": options,
    })
}
