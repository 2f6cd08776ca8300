// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command implementation.
//!
//! ```text
//! current env --> [runner] config edits --> CLI edits --> CommandRunner
//! ```

use tracing::debug;

use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::core::process::runner::{CommandRunner, RunOptions};
use crate::error::Result;

/// Runs the program and relays its output.
///
/// Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if the runner cannot be set up or the program cannot
/// be started.
pub fn run_run_command(args: &RunArgs, config: &Config) -> Result<i32> {
    let runner = build_runner(args, config)?;
    let options = RunOptions::builder().with_silent(!args.no_capture).build();

    let result = runner.run_with(args.command.as_slice(), &options)?;
    debug!(exit_code = result.exit_code(), "child finished");

    if let Some(out) = result.stdout() {
        print!("{out}");
    }
    if let Some(err) = result.stderr() {
        eprint!("{err}");
    }
    Ok(result.exit_code())
}

/// Creates a runner with config edits applied first, then the flags.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable or a
/// `[runner]` entry is malformed.
pub fn build_runner(args: &RunArgs, config: &Config) -> Result<CommandRunner> {
    let mut runner = match &args.cwd {
        Some(dir) => CommandRunner::in_dir(dir),
        None => CommandRunner::new()?,
    };
    config.runner.apply(&mut runner)?;

    for (key, value) in &args.env {
        runner.env_var_add(key, value);
    }
    for key in &args.unset {
        runner.env_var_remove(key);
    }
    for (key, value) in &args.path_prepend {
        runner.env_path_prepend(key, value);
    }
    for (key, value) in &args.path_append {
        runner.env_path_append(key, value);
    }
    Ok(runner)
}
