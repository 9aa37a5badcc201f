//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const SCENARIO: &str = "O gato caça o rato e o gato caça outra vez";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn json_stdout(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// `Data/<item>/prompt.xml` with two items and `QwenMax/cmds.json` with one.
fn datasets() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (item, body) in [("a", "O gato caça o rato"), ("b", "casa casa")] {
        let dir = tmp.path().join("Data").join(item);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("prompt.xml"),
            format!("<prompt><body>{body}</body></prompt>"),
        )
        .unwrap();
    }
    let qwen = tmp.path().join("QwenMax");
    fs::create_dir_all(&qwen).unwrap();
    fs::write(
        qwen.join("cmds.json"),
        r#"{"comando_tematico": {"x": "casa casa", "y": "   "}}"#,
    )
    .unwrap();
    tmp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn no_args_prints_help_and_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEXDIV_METRIC"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_json_reports_package_and_datasets() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["metric"], "syllabic");
    assert_eq!(json["config"]["datasets"][0]["name"], "Data");
    assert_eq!(json["config"]["datasets"][1]["format"], "json");
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_syllabic_ratio() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("texto.txt");
    fs::write(&file, SCENARIO).unwrap();

    cmd()
        .args(["score", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.6154\n"));
}

#[test]
fn score_lexical_metric_flag() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("texto.txt");
    fs::write(&file, SCENARIO).unwrap();

    cmd()
        .args(["score", file.to_str().unwrap(), "--metric", "lexical"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.6364\n"));
}

#[test]
fn score_json_reports_counts() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("texto.txt");
    fs::write(&file, SCENARIO).unwrap();

    let output = cmd()
        .args(["score", file.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["metric"], "syllabic");
    assert_eq!(json["words"], 7);
    assert_eq!(json["units"], 13);
    assert_eq!(json["distinct_units"], 8);
}

#[test]
fn score_empty_file_is_zero() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("vazio.txt");
    fs::write(&file, "").unwrap();

    cmd()
        .args(["score", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.0000\n"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/texto.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn score_respects_configured_input_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lexdiv.toml"), "max_input_bytes = 10\n").unwrap();
    fs::write(tmp.path().join("texto.txt"), SCENARIO).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "texto.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn score_uses_configured_metric() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lexdiv.toml"), "metric = \"lexical\"\n").unwrap();
    fs::write(tmp.path().join("texto.txt"), SCENARIO).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "texto.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.6364\n"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_splits_words() {
    cmd()
        .args(["syllables", "casa", "constante"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ca-sa"))
        .stdout(predicate::str::contains("con-stan-te"));
}

#[test]
fn syllables_json_output() {
    let output = cmd()
        .args(["syllables", "Outra", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json[0]["word"], "outra");
    assert_eq!(json[0]["syllables"][0], "ou");
    assert_eq!(json[0]["syllables"][1], "tra");
}

#[test]
fn syllables_splits_long_words() {
    let word = "ba".repeat(40);
    let output = cmd()
        .args(["syllables", word.as_str(), "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    let syllables = json[0]["syllables"].as_array().unwrap();
    assert_eq!(syllables.len(), 40);
    assert!(json[0].get("error").is_none());
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

// =============================================================================
// Corpus Command
// =============================================================================

#[test]
fn corpus_xml_lists_items_and_statistics() {
    let tmp = datasets();
    let root = tmp.path().join("Data");

    cmd()
        .args(["corpus", root.to_str().unwrap(), "--format", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ TTR: 0.8333"))
        .stdout(predicate::str::contains("→ TTR: 0.5000"))
        .stdout(predicate::str::contains("0.6667"))
        .stdout(predicate::str::contains("0.2357"));
}

#[test]
fn corpus_xml_json_output() {
    let tmp = datasets();
    let root = tmp.path().join("Data");

    let output = cmd()
        .args(["corpus", root.to_str().unwrap(), "--format", "xml", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["name"], "Data");
    assert_eq!(json["items"][0]["label"], "a");
    assert_eq!(json["items"][1]["label"], "b");
    assert_eq!(json["summary"]["count"], 2);
}

#[test]
fn corpus_json_skips_blank_entries() {
    let tmp = datasets();
    let root = tmp.path().join("QwenMax");

    let output = cmd()
        .args([
            "corpus",
            root.to_str().unwrap(),
            "--format",
            "json",
            "--name",
            "Qwen",
            "--json",
        ])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["name"], "Qwen");
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["label"], "cmds.json#0");
    assert_eq!(json["items"][0]["ratio"], 0.5);
}

#[test]
fn corpus_missing_directory_reports_no_items() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("missing");

    cmd()
        .args(["corpus", root.to_str().unwrap(), "--format", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items processed."));
}

#[test]
fn corpus_rejects_unknown_format() {
    cmd()
        .args(["corpus", ".", "--format", "csv"])
        .assert()
        .failure();
}

// =============================================================================
// Compare Command
// =============================================================================

#[test]
fn compare_scores_builtin_datasets() {
    let tmp = datasets();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "compare", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json[0]["name"], "Data");
    assert_eq!(json[0]["summary"]["count"], 2);
    assert_eq!(json[1]["name"], "QwenMax");
    assert_eq!(json[1]["summary"]["count"], 1);
}

#[test]
fn compare_without_datasets_still_succeeds() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items processed."));
}

#[test]
fn compare_uses_configured_datasets() {
    let tmp = datasets();
    fs::write(
        tmp.path().join(".lexdiv.yaml"),
        "datasets:\n  - name: Only\n    path: QwenMax\n    format: json\n",
    )
    .unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "compare", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["name"], "Only");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn chdir_to_missing_directory_fails() {
    cmd()
        .args(["-C", "/nonexistent/dir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

#[test]
fn quiet_and_verbose_are_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}
