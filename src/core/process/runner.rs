// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking command execution.
//!
//! ```text
//! CommandRunner { cwd, env }
//!        |
//!   run_with(command, RunOptions { cwd?, env?, silent })
//!        |
//!        v
//!   check cwd exists --> std::process::Command
//!        |                env_clear + runner env
//!        |
//!   silent ? pipe + wait_with_output : inherit + wait
//!        |
//!        v
//!   CommandResult { exit_code, stdout, stderr }
//!   (non-zero exit is NOT an error)
//! ```

use bon::Builder;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, trace};

use super::command::{CommandLine, CommandResult};
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::{FsError, MupResult, ProcessError};

/// Per-call overrides for [`CommandRunner::run_with`].
#[derive(Debug, Clone, Builder)]
pub struct RunOptions {
    /// Working directory (defaults to the runner's)
    #[builder(into, setters(name = with_cwd))]
    cwd: Option<PathBuf>,
    /// Environment (defaults to the runner's)
    #[builder(setters(name = with_env))]
    env: Option<Env>,
    /// Capture stdout/stderr instead of inheriting them
    #[builder(setters(name = with_silent), default = true)]
    silent: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RunOptions {
    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub const fn env(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    #[must_use]
    pub const fn silent(&self) -> bool {
        self.silent
    }
}

/// Runs external commands with a stored working directory and environment.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    cwd: PathBuf,
    env: Env,
}

impl CommandRunner {
    /// Creates a runner for the current directory and a snapshot of the
    /// current process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> MupResult<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::in_dir(cwd))
    }

    /// Creates a runner for `cwd` with a snapshot of the current process
    /// environment.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: current_env(),
        }
    }

    /// Replaces the runner's environment.
    #[must_use]
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Appends `value` to the path-list variable `key`.
    pub fn env_path_append(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.env.append_path(key, value);
        self
    }

    /// Prepends `value` to the path-list variable `key`.
    pub fn env_path_prepend(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.env.prepend_path(key, value);
        self
    }

    /// Sets or overwrites a variable.
    pub fn env_var_add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.env.set(key, value);
        self
    }

    /// Removes a variable if present.
    pub fn env_var_remove(&mut self, key: &str) -> &mut Self {
        self.env.remove(key);
        self
    }

    /// Runs `command` silently with the runner's settings.
    ///
    /// # Errors
    ///
    /// See [`CommandRunner::run_with`].
    pub fn run(&self, command: impl Into<CommandLine>) -> MupResult<CommandResult> {
        self.run_with(command, &RunOptions::default())
    }

    /// Runs `command` and blocks until it exits.
    ///
    /// A non-zero exit code is returned in the result, never as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command line is empty.
    /// - The working directory does not exist or is not a directory.
    /// - The process cannot be spawned or waited on.
    pub fn run_with(
        &self,
        command: impl Into<CommandLine>,
        options: &RunOptions,
    ) -> MupResult<CommandResult> {
        let line = command.into();
        let program = line.program().ok_or(ProcessError::EmptyCommand)?;
        let cwd = options.cwd().unwrap_or(&self.cwd);
        let env = options.env().unwrap_or(&self.env);

        check_working_dir(cwd)?;

        let cmd_line = line.to_string();
        debug!(cwd = %cwd.display(), "cd");
        debug!(cmd = %cmd_line, "exec");
        trace!(vars = env.len(), env = ?env.to_map(), "environment");

        let mut command = Command::new(program);
        command
            .args(line.arguments())
            .current_dir(cwd)
            .env_clear()
            .envs(env.iter_os());

        let result = if options.silent() {
            command.stdout(Stdio::piped()).stderr(Stdio::piped());
            let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
            let output = child
                .wait_with_output()
                .map_err(|source| ProcessError::WaitFailed {
                    command: cmd_line.clone(),
                    source,
                })?;
            CommandResult::new(
                exit_code(output.status),
                Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                Some(String::from_utf8_lossy(&output.stderr).into_owned()),
            )
        } else {
            let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
            let status = child.wait().map_err(|source| ProcessError::WaitFailed {
                command: cmd_line.clone(),
                source,
            })?;
            CommandResult::new(exit_code(status), None, None)
        };

        trace!(cmd = %cmd_line, exit_code = result.exit_code(), "completed");
        Ok(result)
    }
}

fn check_working_dir(cwd: &Path) -> MupResult<()> {
    let metadata = std::fs::metadata(cwd).map_err(|e| FsError::from_io(cwd, e))?;
    if !metadata.is_dir() {
        return Err(FsError::IoError {
            path: cwd.display().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotADirectory),
        }
        .into());
    }
    Ok(())
}

/// Exit code of a finished process; `-signal` if it was killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    status.code().unwrap_or(-1)
}
