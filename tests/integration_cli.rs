// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `mup` binary.
//!
//! Runs the built executable with realistic command lines.

use std::path::Path;
use std::process::{Command, Output};

fn mup(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mup"))
        .args(["--no-local-config"])
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run mup")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Basic Commands
// =============================================================================

#[test]
fn cli_version_prints_package_version() {
    let temp = tempfile::tempdir().unwrap();
    let output = mup(&["version"], temp.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn cli_without_command_fails() {
    let temp = tempfile::tempdir().unwrap();
    let output = mup(&[], temp.path());
    assert!(!output.status.success());
}

#[test]
fn cli_options_reads_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("extra.toml");
    std::fs::write(&config, "[git]\nbranch = \"main\"\n").unwrap();

    let output = mup(&["-c", &config.to_string_lossy(), "options"], temp.path());
    assert!(output.status.success());
    assert!(
        stdout(&output)
            .lines()
            .any(|line| line.starts_with("git.branch") && line.ends_with("= main"))
    );
}

#[test]
fn cli_invalid_config_fails() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("bad.toml");
    std::fs::write(&config, "[unique_name]\nmax_iterations = 0\n").unwrap();

    let output = mup(&["-c", &config.to_string_lossy(), "version"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_iterations"));
}

// =============================================================================
// Run Command
// =============================================================================

#[cfg(unix)]
#[test]
fn cli_run_relays_output_and_exit_code() {
    let temp = tempfile::tempdir().unwrap();
    let output = mup(
        &["run", "-e", "GREETING=hello", "--", "sh", "-c", "echo $GREETING; exit 7"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(stdout(&output), "hello\n");
}

#[cfg(unix)]
#[test]
fn cli_run_in_other_directory() {
    let temp = tempfile::tempdir().unwrap();
    let sub = temp.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("marker.txt"), "").unwrap();

    let output = mup(&["run", "--cwd", "sub", "--", "ls"], temp.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "marker.txt");
}

#[test]
fn cli_run_unknown_program_fails() {
    let temp = tempfile::tempdir().unwrap();
    let output = mup(&["run", "--", "mup-definitely-not-a-program"], temp.path());
    assert!(!output.status.success());
}

// =============================================================================
// Filesystem Commands
// =============================================================================

#[test]
fn cli_mkdir_then_find() {
    let temp = tempfile::tempdir().unwrap();

    let output = mup(&["mkdir", "out/nested/report.txt", "--file"], temp.path());
    assert!(output.status.success());
    let nested = temp.path().join("out").join("nested");
    assert!(nested.is_dir());

    std::fs::write(nested.join("report.txt"), "").unwrap();
    std::fs::write(nested.join("notes.md"), "").unwrap();

    let output = mup(&["find", "out", "*.txt", "-r"], temp.path());
    assert!(output.status.success());
    let found: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("report.txt"));

    let output = mup(&["find", "out", "*.txt"], temp.path());
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn cli_unique_name_integer() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("data.csv"), "").unwrap();

    let output = mup(&["unique-name", "data.csv", "--mode", "integer"], temp.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "data-001.csv");

    let output = mup(&["unique-name", "free.csv"], temp.path());
    assert_eq!(stdout(&output).trim(), "free.csv");
}

#[test]
fn cli_unique_name_unknown_mode_fails() {
    let temp = tempfile::tempdir().unwrap();
    let output = mup(&["unique-name", "a.txt", "--mode", "sequential"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not implemented"));
}

#[test]
fn cli_env_overrides_config() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("data.csv"), "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mup"))
        .args(["--no-local-config", "unique-name", "data.csv"])
        .env("MUP_UNIQUE_NAME__MODE", "integer")
        .env("MUP_UNIQUE_NAME__DELIMITER", "_")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "data_001.csv");
}
