// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            MupError (<= 24 bytes)
//!                   |
//!   +------+------+-+----+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//!  Git  Process   Fs   Config  NotImpl Io/Other
//!  Box    Box    Box    Box    Box<str> Box
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed, CloneFailed
//!   Process EmptyCommand, SpawnFailed, WaitFailed, Unsupported
//!   Fs      NotFound, PermissionDenied, IoError, UniqueNameExhausted
//!   Config  InvalidValue, InvalidPattern
//! ```

use std::path::Path;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MupError`].
pub type MupResult<T> = std::result::Result<T, MupError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MupError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Requested behavior has no implementation (e.g. an unknown unique-name mode).
    #[error("not implemented: {0}")]
    NotImplemented(Box<str>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl MupError {
    /// Creates a [`MupError::NotImplemented`].
    pub fn not_implemented(what: impl Into<String>) -> Self {
        Self::NotImplemented(what.into().into_boxed_str())
    }

    /// Returns true if this error means a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Fs(e) => match e.as_ref() {
                FsError::NotFound(_) => true,
                FsError::IoError { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
                _ => false,
            },
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MupError {
                fn from(err: $error) -> Self {
                    MupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    FsError => Fs,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No program was given.
    #[error("empty command line")]
    EmptyCommand,

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting for the process or reading its output.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation is not available on this platform.
    #[error("'{operation}' is not supported on {platform}")]
    Unsupported {
        operation: String,
        platform: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No free name was found within the iteration budget.
    #[error("no unique name for '{path}' after {attempts} attempts")]
    UniqueNameExhausted { path: String, attempts: usize },
}

impl FsError {
    /// Classifies an `io::Error` raised while operating on `path`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Glob patterns could not be compiled.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}
