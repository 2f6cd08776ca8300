// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command runner.
//!
//! Spawns real programs through the public API.

use mup_rs::core::env::container::Env;
use mup_rs::core::env::current_env;
use mup_rs::core::process::command::CommandLine;
use mup_rs::core::process::runner::{CommandRunner, RunOptions};
use mup_rs::utility::fs::temp::TempPath;

// =============================================================================
// Working directory
// =============================================================================

#[cfg(unix)]
#[test]
fn process_runs_in_temp_workspace() {
    let temp = TempPath::new().unwrap();
    std::fs::write(temp.path().join("input.txt"), "payload").unwrap();

    let runner = CommandRunner::in_dir(temp.path());
    let result = runner.run(["cat", "input.txt"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), Some("payload"));
    assert_eq!(result.stderr(), Some(""));
}

#[cfg(unix)]
#[test]
fn process_arguments_are_not_shell_expanded() {
    let temp = TempPath::new().unwrap();
    let runner = CommandRunner::in_dir(temp.path());

    let result = runner
        .run(CommandLine::new("echo").arg("$HOME").arg("*").arg("a b"))
        .unwrap();
    assert_eq!(result.stdout(), Some("$HOME * a b\n"));
}

// =============================================================================
// Environment
// =============================================================================

#[cfg(unix)]
#[test]
fn process_path_prepend_finds_tool() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempPath::new().unwrap();
    let bin = temp.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    let tool = bin.join("mup-probe");
    std::fs::write(&tool, "#!/bin/sh\necho probe-ok\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let mut runner = CommandRunner::in_dir(temp.path()).with_env(current_env());
    runner.env_path_prepend("PATH", bin.to_string_lossy());

    let result = runner.run("mup-probe").unwrap();
    assert_eq!(result.stdout(), Some("probe-ok\n"));
}

#[cfg(unix)]
#[test]
fn process_per_call_env_replaces_runner_env() {
    let temp = TempPath::new().unwrap();
    let mut runner = CommandRunner::in_dir(temp.path()).with_env(current_env());
    runner.env_var_add("MUP_SCOPE", "runner");

    let mut call_env = Env::new();
    call_env.set("MUP_SCOPE", "call");
    call_env.set("PATH", "/bin:/usr/bin");
    let options = RunOptions::builder().with_env(call_env).build();

    let result = runner
        .run_with(["sh", "-c", "echo $MUP_SCOPE"], &options)
        .unwrap();
    assert_eq!(result.stdout(), Some("call\n"));

    let result = runner.run(["sh", "-c", "echo $MUP_SCOPE"]).unwrap();
    assert_eq!(result.stdout(), Some("runner\n"));
}
