//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("docsift").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-o", tmp.path().to_str().unwrap()])
        .arg(get_fixture_path("get-started.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Documentation saved to"));

    let output = tmp.path().join("get-started-with-the-docs-api.md");
    assert!(output.exists());

    let markdown = std::fs::read_to_string(output).unwrap();
    assert!(markdown.contains("Swift"));
    assert!(markdown.contains("Kotlin"));
    assert!(markdown.contains("Web"));
    assert!(!markdown.contains("Go to console"));
}

#[test]
fn test_cli_stdin_input() {
    let tmp = TempDir::new().unwrap();
    let html = std::fs::read_to_string(get_fixture_path("get-started.html")).unwrap();

    cmd()
        .args(["-o", tmp.path().to_str().unwrap(), "-"])
        .write_stdin(html)
        .assert()
        .success();

    assert!(tmp.path().join("get-started-with-the-docs-api.md").exists());
}

#[test]
fn test_cli_language_filtering() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg(get_fixture_path("get-started.html"))
        .args(["-o", tmp.path().to_str().unwrap(), "-l", "kotlin"])
        .assert()
        .success();

    let output = tmp.path().join("get-started-with-the-docs-api-kotlin.md");
    assert!(output.exists());

    let markdown = std::fs::read_to_string(output).unwrap();
    assert!(markdown.contains("Gradle"));
    assert!(!markdown.contains("Xcode"));
    assert!(!markdown.contains("npm"));
}

#[test]
fn test_cli_language_variant_normalization() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg(get_fixture_path("get-started.html"))
        .args(["-o", tmp.path().to_str().unwrap(), "-l", "android"])
        .assert()
        .success();

    assert!(tmp.path().join("get-started-with-the-docs-api-kotlin.md").exists());
}

#[test]
fn test_cli_unknown_language_warns_but_succeeds() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg(get_fixture_path("get-started.html"))
        .args(["-o", tmp.path().to_str().unwrap(), "-l", "cobol"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown language"));

    // Nothing recognized to filter by, so the unfiltered filename is used.
    assert!(tmp.path().join("get-started-with-the-docs-api.md").exists());
}

#[test]
fn test_cli_undetected_language_warns() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg(get_fixture_path("get-started.html"))
        .args(["-o", tmp.path().to_str().unwrap(), "-l", "ruby"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found in this documentation"));
}

#[test]
fn test_cli_no_header() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-o", tmp.path().to_str().unwrap(), "--no-header"])
        .arg(get_fixture_path("get-started.html"))
        .assert()
        .success();

    let markdown = std::fs::read_to_string(tmp.path().join("get-started-with-the-docs-api.md")).unwrap();
    assert!(!markdown.contains("**Extracted:**"));
}

#[test]
fn test_cli_verbose() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-v", "-o", tmp.path().to_str().unwrap()])
        .arg(get_fixture_path("get-started.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Docsift"))
        .stderr(predicate::str::contains("Detecting languages"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.html").assert().failure();
}

#[test]
fn test_cli_languages_conflicts_with_interactive() {
    cmd()
        .arg(get_fixture_path("get-started.html"))
        .args(["-l", "swift", "-i"])
        .assert()
        .failure();
}

#[test]
fn test_cli_interactive_selection() {
    let tmp = TempDir::new().unwrap();

    // Detected set is [kotlin, swift, web]; "2" selects swift.
    cmd()
        .args(["-o", tmp.path().to_str().unwrap(), "-i"])
        .arg(get_fixture_path("get-started.html"))
        .write_stdin("2\n")
        .assert()
        .success();

    let output = tmp.path().join("get-started-with-the-docs-api-swift.md");
    assert!(output.exists());

    let markdown = std::fs::read_to_string(output).unwrap();
    assert!(markdown.contains("Xcode"));
    assert!(!markdown.contains("Gradle"));
}
