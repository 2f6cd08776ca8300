// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for mup-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (repeatable, in order)
//! 3. mup.toml (cwd, optional)
//! 4. MUP_* env vars
//! 5. CLI flags of the individual command
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MUP_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! MUP_UNIQUE_NAME__MODE=integer  → unique_name.mode = "integer"
//! MUP_GIT__BRANCH=main           → git.branch = "main"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, RunnerConfig, UniqueNameConfig};

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "mup.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Defaults for unique name generation.
    pub unique_name: UniqueNameConfig,
    /// Git options.
    pub git: GitConfig,
    /// Environment edits for `mup run`.
    pub runner: RunnerConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mup_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("mup.toml")
    ///     .with_env_prefix("MUP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        self.unique_name.validate()?;
        self.runner.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is sorted by key; runner entries are listed one per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_unique_name_options(&mut options);
        options.insert("git.branch".into(), self.git.branch.clone());
        self.format_runner_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        if let Some(ref path) = self.global.log_file {
            options.insert("global.log_file".into(), path.display().to_string());
        }
    }

    fn format_unique_name_options(&self, options: &mut BTreeMap<String, String>) {
        let unique = &self.unique_name;
        options.insert("unique_name.mode".into(), unique.mode.to_string());
        options.insert(
            "unique_name.length".into(),
            unique
                .length
                .unwrap_or_else(|| unique.mode.default_length())
                .to_string(),
        );
        options.insert("unique_name.delimiter".into(), unique.delimiter.clone());
        options.insert(
            "unique_name.max_iterations".into(),
            unique.max_iterations.to_string(),
        );
    }

    fn format_runner_options(&self, options: &mut BTreeMap<String, String>) {
        let runner = &self.runner;
        for (name, entries) in [
            ("env", &runner.env),
            ("unset", &runner.unset),
            ("path_prepend", &runner.path_prepend),
            ("path_append", &runner.path_append),
        ] {
            for (i, entry) in entries.iter().enumerate() {
                options.insert(format!("runner.{name}[{i}]"), entry.clone());
            }
        }
    }
}
