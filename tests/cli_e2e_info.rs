//! End-to-end tests for the metadata actions: --find-config-path and
//! --file-info.

#[allow(dead_code)]
mod common;
#[allow(unused_imports)]
use common::prelude::*;

// =============================================================================
// --find-config-path
// =============================================================================

#[test]
fn test_find_config_path_reports_relative_path() {
    let fixture = TestFixture::new()
        .with_config("tab_width = 4\n")
        .with_file("src/a.json", "{}");

    fixture
        .command()
        .arg("--find-config-path")
        .arg("src/a.json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(".canonfmt.toml"));
}

#[test]
fn test_find_config_path_defaults_to_working_directory() {
    let fixture = TestFixture::new().with_config("tab_width = 4\n");

    fixture
        .command()
        .arg("--find-config-path")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(".canonfmt.toml"));
}

#[test]
fn test_find_config_path_walks_to_parent_directories() {
    let fixture = TestFixture::new()
        .with_config("tab_width = 4\n")
        .with_file("nested/deep/a.json", "{}");

    fixture
        .command()
        .arg("--find-config-path")
        .arg("nested/deep/a.json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(".canonfmt.toml"));
}

// =============================================================================
// --file-info
// =============================================================================

#[test]
fn test_file_info_reports_inferred_parser() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--file-info")
        .arg("data.json")
        .assert()
        .code(0)
        .stdout("{\n  \"ignored\": false,\n  \"inferredParser\": \"json\"\n}\n");
}

#[test]
fn test_file_info_reports_null_for_unknown_extension() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--file-info")
        .arg("main.rs")
        .assert()
        .code(0)
        .stdout("{\n  \"ignored\": false,\n  \"inferredParser\": null\n}\n");
}

#[test]
fn test_file_info_respects_config_exclude() {
    let fixture = TestFixture::new().with_config(samples::EXCLUDE_LOCKS_CONFIG);

    fixture
        .command()
        .arg("--file-info")
        .arg("pkg.lock.json")
        .assert()
        .code(0)
        .stdout("{\n  \"ignored\": true,\n  \"inferredParser\": \"json\"\n}\n");
}

#[test]
fn test_file_info_does_not_require_the_file_to_exist() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--file-info")
        .arg("does/not/exist.yaml")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"inferredParser\": \"yaml\""));
}
