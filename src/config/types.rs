// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]       log_level, log_file
//! [unique_name]  mode, length, delimiter, max_iterations
//! [git]          branch
//! [runner]       env, unset, path_prepend, path_append   ("KEY=VALUE" lists)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::process::runner::CommandRunner;
use crate::error::ConfigError;
use crate::git::DEFAULT_BRANCH;
use crate::logging::LogLevel;
use crate::utility::fs::unique::{
    DEFAULT_DELIMITER, DEFAULT_MAX_ITERATIONS, UniqueMode, UniqueNameOptions,
};

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Optional log file; everything up to TRACE goes there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Defaults for `mup unique-name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniqueNameConfig {
    pub mode: UniqueMode,
    /// Suffix length; the mode's default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub delimiter: String,
    pub max_iterations: usize,
}

impl Default for UniqueNameConfig {
    fn default() -> Self {
        Self {
            mode: UniqueMode::default(),
            length: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl UniqueNameConfig {
    /// Builds options from this section.
    #[must_use]
    pub fn to_options(&self, force: bool) -> UniqueNameOptions {
        UniqueNameOptions::builder()
            .with_mode(self.mode)
            .maybe_with_length(self.length)
            .with_delimiter(self.delimiter.as_str())
            .with_max_iterations(self.max_iterations)
            .with_force(force)
            .build()
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(invalid("unique_name", "max_iterations", "must be at least 1"));
        }
        if self.length == Some(0) {
            return Err(invalid("unique_name", "length", "must be at least 1"));
        }
        Ok(())
    }
}

/// Git settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Branch checked out by `mup git clone`.
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Environment edits applied by `mup run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Variables to set, as `KEY=VALUE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
    /// Variables to remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unset: Vec<String>,
    /// Path-list entries to put first, as `KEY=VALUE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_prepend: Vec<String>,
    /// Path-list entries to put last, as `KEY=VALUE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_append: Vec<String>,
}

impl RunnerConfig {
    /// Applies all edits to `runner`, in the order env, unset, prepend, append.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for a malformed entry.
    pub fn apply(&self, runner: &mut CommandRunner) -> Result<(), ConfigError> {
        for entry in &self.env {
            let (key, value) = parse_key_value("env", entry)?;
            runner.env_var_add(key, value);
        }
        for key in &self.unset {
            runner.env_var_remove(key);
        }
        for entry in &self.path_prepend {
            let (key, value) = parse_key_value("path_prepend", entry)?;
            runner.env_path_prepend(key, value);
        }
        for entry in &self.path_append {
            let (key, value) = parse_key_value("path_append", entry)?;
            runner.env_path_append(key, value);
        }
        Ok(())
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        for (key, entries) in [
            ("env", &self.env),
            ("path_prepend", &self.path_prepend),
            ("path_append", &self.path_append),
        ] {
            for entry in entries {
                parse_key_value(key, entry)?;
            }
        }
        Ok(())
    }
}

/// Splits `KEY=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidValue` if there is no `=` or the key is
/// empty.
pub fn parse_key_value<'a>(field: &str, entry: &'a str) -> Result<(&'a str, &'a str), ConfigError> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(invalid(
            "runner",
            field,
            &format!("expected KEY=VALUE, got '{entry}'"),
        )),
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
