//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_dirmatch(args: &[&str]) -> std::process::Output {
    run_dirmatch_in(Path::new(env!("CARGO_MANIFEST_DIR")), args, &[])
}

fn run_dirmatch_in(cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_dirmatch");
    let mut command = Command::new(bin);
    command
        .current_dir(cwd)
        .args(args)
        .env_remove("DIRMATCH_CASE")
        .env_remove("DIRMATCH_FORMAT")
        .env_remove("DIRMATCH_ALLOW_EMPTY")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("failed to run dirmatch binary")
}

fn folders(input: &[&str], output: &[&str]) -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    for (dir, names) in [("in", input), ("out", output)] {
        std::fs::create_dir(root.path().join(dir)).unwrap();
        for name in names {
            std::fs::write(root.path().join(dir).join(name), name).unwrap();
        }
    }
    root
}

#[test]
fn verify_reports_each_input_file() {
    let root = folders(&["a.txt", "b.txt"], &["a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Match found for a.txt in output folder."));
    assert!(stdout.contains("No match found for b.txt in output folder."));
    assert!(stdout.contains("1 of 2 input file(s) matched, 1 missing."));
}

#[test]
fn strict_verify_fails_when_outputs_are_missing() {
    let root = folders(&["a.txt", "b.txt"], &["a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out", "--strict"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("1 of 2 input file(s) have no match"));
}

#[test]
fn strict_verify_passes_on_full_match() {
    let root = folders(&["a.txt", "b.txt"], &["b.txt", "a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out", "--strict"], &[]);
    assert!(output.status.success());
}

#[test]
fn json_report_is_machine_readable() {
    let root = folders(&["a.txt", "b.txt"], &["a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out", "--format", "json"], &[]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["unmatched"], 1);
    assert_eq!(value["case"], "sensitive");
}

#[test]
fn case_setting_comes_from_environment() {
    let root = folders(&["A.TXT"], &["a.txt"]);
    let output = run_dirmatch_in(
        root.path(),
        &["verify", "in", "out", "--strict"],
        &[("DIRMATCH_CASE", "insensitive")],
    );
    assert!(output.status.success());

    let output = run_dirmatch_in(root.path(), &["verify", "in", "out", "--strict"], &[]);
    assert!(!output.status.success());
}

#[test]
fn invalid_environment_setting_is_reported() {
    let root = folders(&["a.txt"], &["a.txt"]);
    let output =
        run_dirmatch_in(root.path(), &["verify", "in", "out"], &[("DIRMATCH_FORMAT", "xml")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("DIRMATCH_FORMAT"));
}

#[test]
fn empty_folder_needs_allow_empty() {
    let root = folders(&["a.txt"], &[]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("One or both folders are empty"));

    let output = run_dirmatch_in(root.path(), &["verify", "in", "out", "--allow-empty"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("No match found for a.txt"));
}

#[test]
fn missing_folder_is_reported() {
    let root = folders(&["a.txt"], &["a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "nope"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Folder not found"));
    assert!(output.stdout.is_empty());
}

#[test]
fn path_below_a_file_is_reported_as_missing_folder() {
    let root = folders(&["a.txt"], &["a.txt"]);
    let output = run_dirmatch_in(root.path(), &["verify", "in", "in/a.txt/sub"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Folder not found"), "{stderr}");
}

#[test]
fn malformed_dotenv_is_reported() {
    let root = folders(&["a.txt"], &["a.txt"]);
    std::fs::write(root.path().join(".env"), "<><><>\n").unwrap();
    let output = run_dirmatch_in(root.path(), &["verify", "in", "out"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to load .env file"), "{stderr}");
}

#[test]
fn list_skips_subdirectories() {
    let root = folders(&["a.txt"], &[]);
    std::fs::create_dir(root.path().join("in").join("nested")).unwrap();
    let output = run_dirmatch_in(root.path(), &["list", "in"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.trim(), "a.txt");
}

#[test]
fn verify_help_shows_usage() {
    let output = run_dirmatch(&["verify", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--allow-empty"));
    assert!(stdout.contains("--strict"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_dirmatch(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
