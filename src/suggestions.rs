//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("No configuration file found for {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when no configuration file could be resolved.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the --config flag
/// - Using the CANONFMT_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No configuration file found for {path}\n\n\
         hint: Create a .canonfmt.toml file in your project root\n\
         hint: Use --config to specify a different path\n\
         hint: Set CANONFMT_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for an invalid glob pattern.
///
/// Includes hints about glob syntax.
pub fn invalid_glob(pattern: &str, error: &glob::PatternError) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid glob pattern: {pattern}\n\
         error: {error}\n\n\
         hint: Use * for single path component, ** for recursive matching\n\
         hint: Use [abc] for character classes, [!abc] to negate\n\
         hint: Escape special characters with backslash"
    )
}

/// Generate an error for standard input that arrives without a way to pick
/// a parser.
///
/// Includes the flags that resolve the ambiguity.
pub fn no_parser_for_stdin() -> anyhow::Error {
    anyhow::anyhow!(
        "No parser and no file path given, cannot infer how to format standard input\n\n\
         hint: Use --parser to name the input language (json, yaml, toml)\n\
         hint: Use --stdin-filepath so the language can be inferred from the extension"
    )
}

/// Generate an error for a path whose extension maps to no known language.
///
/// Includes the list of supported extensions.
pub fn cannot_infer_parser(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Cannot infer a parser from the file path: {path}\n\n\
         hint: Supported extensions are .json, .yaml, .yml and .toml\n\
         hint: Use --parser to name the input language explicitly",
        path = path.display()
    )
}

/// Generate an error for an unknown `--help` topic.
///
/// Suggests the closest flag name when there is one.
pub fn unknown_help_topic(topic: &str, known: &[&str]) -> anyhow::Error {
    let suggestion = find_similar(topic, known);
    let did_you_mean = suggestion
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Unknown help topic: {topic}{did_you_mean}\n\n\
         hint: Run canonfmt --help for the list of options"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
