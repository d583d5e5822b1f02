//! Usage renderers behind `--help` and the no-input fallback.
//!
//! The general usage text is rendered from the clap command definition, so
//! flag descriptions live in exactly one place (`src/cli.rs`). Detailed
//! usage for a single option is assembled from the same definition:
//! description, short alias, accepted values and default.

use anyhow::Result;
use clap::CommandFactory;

use canonfmt::suggestions;

use crate::cli::Cli;

/// Render the general usage text.
pub fn general() -> String {
    let mut command = Cli::command();
    let mut text = command.render_long_help().to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Render detailed usage for the option named `topic` (without the leading
/// dashes, e.g. `check` or `loglevel`).
///
/// # Errors
///
/// Returns an error (with a did-you-mean hint when possible) for a topic
/// that names no option.
pub fn detailed(topic: &str) -> Result<String> {
    let command = Cli::command();

    let Some(argument) = command
        .get_arguments()
        .find(|argument| argument.get_long() == Some(topic))
    else {
        let known: Vec<&str> = command
            .get_arguments()
            .filter_map(|argument| argument.get_long())
            .collect();
        return Err(suggestions::unknown_help_topic(topic, &known));
    };

    let mut text = format!("--{}", topic);
    if let Some(short) = argument.get_short() {
        text.push_str(&format!(", -{}", short));
    }
    text.push('\n');

    if let Some(help) = argument.get_long_help().or_else(|| argument.get_help()) {
        text.push_str(&format!("\n  {}\n", help));
    }

    let possible_values = argument.get_possible_values();
    if !possible_values.is_empty() {
        let names: Vec<&str> = possible_values
            .iter()
            .map(|value| value.get_name())
            .collect();
        text.push_str(&format!("\nValid options: {}\n", names.join(", ")));
    }

    let defaults = argument.get_default_values();
    if !defaults.is_empty() {
        let rendered: Vec<String> = defaults
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect();
        text.push_str(&format!("\nDefault: {}\n", rendered.join(", ")));
    }

    Ok(text)
}
