// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `git` executable, run through [`CommandRunner`].
//!
//! Every invocation sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`
//! so that a credential prompt can never block.

use std::path::Path;
use tracing::trace;

use crate::core::process::command::{CommandLine, CommandResult};
use crate::core::process::runner::CommandRunner;
use crate::error::{GitError, MupResult};

/// Runs `git <args>` in `cwd`, capturing its output.
///
/// A non-zero exit is returned in the result.
pub(super) fn git(args: &[&str], cwd: &Path) -> MupResult<CommandResult> {
    let mut runner = CommandRunner::in_dir(cwd);
    runner
        .env_var_add("GCM_INTERACTIVE", "never")
        .env_var_add("GIT_TERMINAL_PROMPT", "0");
    runner.run(CommandLine::new("git").args(args))
}

/// Runs `git <args>` in `cwd` and returns its trimmed stdout.
///
/// A non-zero exit becomes `GitError::CommandFailed` carrying stderr.
pub(super) fn git_output(args: &[&str], cwd: &Path) -> MupResult<String> {
    let result = git(args, cwd)?;
    if !result.success() {
        return Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            message: result.stderr().unwrap_or_default().trim().to_string(),
        }
        .into());
    }
    Ok(result.stdout().unwrap_or_default().trim().to_string())
}

/// Returns true if a `git` executable is on `PATH`.
#[must_use]
pub fn is_git_available() -> bool {
    let found = which::which("git");
    trace!(git = ?found.as_ref().ok(), "git lookup");
    found.is_ok()
}
