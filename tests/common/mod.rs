//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions and sample
//! documents to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("a.json", samples::MESSY_JSON);
//!     fixture.command().arg("a.json").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::samples;
    pub use super::TestFixture;
}

/// Sample documents for testing.
#[allow(dead_code)]
pub mod samples {
    /// JSON with unsorted keys and no indentation.
    pub const MESSY_JSON: &str = r#"{"zebra":1,"apple":{"c":3,"b":[1,2]}}"#;

    /// The canonical form of [`MESSY_JSON`] at the default tab width.
    pub const CANONICAL_JSON: &str =
        "{\n  \"apple\": {\n    \"b\": [\n      1,\n      2\n    ],\n    \"c\": 3\n  },\n  \"zebra\": 1\n}\n";

    /// YAML with unsorted keys and flow-style collections.
    pub const MESSY_YAML: &str = "zebra: 1\napple: {c: 3, b: 2}\n";

    /// The canonical form of [`MESSY_YAML`].
    pub const CANONICAL_YAML: &str = "apple:\n  b: 2\n  c: 3\nzebra: 1\n";

    /// TOML with unsorted keys and irregular spacing.
    pub const MESSY_TOML: &str = "zebra=1\napple =  2\n";

    /// The canonical form of [`MESSY_TOML`].
    pub const CANONICAL_TOML: &str = "apple = 2\nzebra = 1\n";

    /// Input that no parser accepts.
    pub const INVALID_JSON: &str = "{\"unclosed\": ";

    /// A config file that widens the indent.
    pub const WIDE_INDENT_CONFIG: &str = "tab_width = 4\n";

    /// A config file that excludes lock files.
    pub const EXCLUDE_LOCKS_CONFIG: &str = "exclude = [\"*.lock.json\"]\n";
}

/// A test fixture that provides a temporary directory with optional files.
///
/// This struct simplifies the common pattern of creating a temp directory,
/// populating it with inputs and a `.canonfmt.toml`, and running the binary
/// inside it.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_config(samples::WIDE_INDENT_CONFIG)
///     .with_file("test.json", samples::MESSY_JSON);
///
/// fixture.command().arg("test.json").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.canonfmt.toml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".canonfmt.toml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".canonfmt.toml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("canonfmt");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config("tab_width = 4");
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("test.json", "{}");
        assert!(fixture.path().join("test.json").exists());
    }

    #[test]
    fn test_samples_parse_in_their_own_language() {
        serde_json::from_str::<serde_json::Value>(samples::MESSY_JSON)
            .expect("MESSY_JSON should be valid JSON");
        serde_yaml::from_str::<serde_yaml::Value>(samples::MESSY_YAML)
            .expect("MESSY_YAML should be valid YAML");
        samples::MESSY_TOML
            .parse::<toml::Table>()
            .expect("MESSY_TOML should be valid TOML");
    }

    #[test]
    fn test_invalid_json_is_actually_invalid() {
        let result = serde_json::from_str::<serde_json::Value>(samples::INVALID_JSON);
        assert!(result.is_err(), "INVALID_JSON should not parse");
    }
}
