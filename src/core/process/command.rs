// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command lines and their results.
//!
//! ```text
//! CommandLine
//!  • "git"                 single program, never split
//!  • ["git", "rev-parse"]  program + arguments
//!  • from_bytes(b"git")    raw byte string
//!
//! CommandResult { exit_code, stdout: Option, stderr: Option }
//! ```

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Program and arguments of a child process.
///
/// No shell is involved: a single string is the program name as-is, even if
/// it contains spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    parts: Vec<OsString>,
}

impl CommandLine {
    /// Creates a command line for `program` with no arguments.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            parts: vec![program.as_ref().to_os_string()],
        }
    }

    /// Creates a command line from a raw byte string naming the program.
    #[must_use]
    pub fn from_bytes(program: &[u8]) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            Self::new(OsStr::from_bytes(program))
        }
        #[cfg(not(unix))]
        {
            Self::new(String::from_utf8_lossy(program).as_ref())
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.parts.push(arg.as_ref().to_os_string());
        self
    }

    /// Adds multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.parts
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Returns the program, or `None` for an empty sequence.
    #[must_use]
    pub fn program(&self) -> Option<&OsStr> {
        self.parts.first().map(OsString::as_os_str)
    }

    /// Returns the arguments after the program.
    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        self.parts.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let part = part.to_string_lossy();
            if part.contains(' ') {
                write!(f, "\"{part}\"")?;
            } else {
                f.write_str(&part)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for CommandLine {
    fn from(program: &str) -> Self {
        Self::new(program)
    }
}

impl From<String> for CommandLine {
    fn from(program: String) -> Self {
        Self::new(program)
    }
}

impl From<&Path> for CommandLine {
    fn from(program: &Path) -> Self {
        Self::new(program)
    }
}

impl From<PathBuf> for CommandLine {
    fn from(program: PathBuf) -> Self {
        Self::new(program)
    }
}

impl<S: AsRef<OsStr>> From<Vec<S>> for CommandLine {
    fn from(parts: Vec<S>) -> Self {
        Self::default().args(parts)
    }
}

impl<S: AsRef<OsStr>> From<&[S]> for CommandLine {
    fn from(parts: &[S]) -> Self {
        Self::default().args(parts)
    }
}

impl<S: AsRef<OsStr>, const N: usize> From<[S; N]> for CommandLine {
    fn from(parts: [S; N]) -> Self {
        Self::default().args(parts)
    }
}

/// Outcome of one command execution.
///
/// `stdout`/`stderr` are `Some` only when the streams were captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    exit_code: i32,
    stdout: Option<String>,
    stderr: Option<String>,
}

impl CommandResult {
    pub(super) const fn new(
        exit_code: i32,
        stdout: Option<String>,
        stderr: Option<String>,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Returns the process exit code (0 = success, negative = killed by signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout, if the command ran silently.
    #[must_use]
    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    /// Returns captured stderr, if the command ran silently.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}
