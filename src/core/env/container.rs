// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned environment variable set.
//!
//! ```text
//! Env
//! vars: BTreeMap<EnvKey, String>      (deterministic order)
//! raw:  BTreeMap<OsString, OsString>  non-Unicode entries, passed through
//! set/get/remove                       plain variables
//! append_path/prepend_path             separator-delimited lists
//! ```

use super::types::{EnvKey, PATH_SEPARATOR, PathPosition};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// A set of environment variables owned by its holder.
///
/// Edits never touch the real process environment; cloning yields an
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
    raw: BTreeMap<OsString, OsString>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            raw: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v))
                .collect(),
            raw: BTreeMap::new(),
        }
    }

    /// Creates an environment from OS-level pairs, such as
    /// `std::env::vars_os()`.
    ///
    /// Entries whose name or value is not valid Unicode are kept as they
    /// are: [`Env::get`] does not see them, but [`Env::iter_os`] and child
    /// processes do.
    #[must_use]
    pub fn from_vars_os(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut env = Self::new();
        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    env.vars.insert(EnvKey::new(key), value);
                }
                (key, value) => {
                    let key = key.map_or_else(|k| k, OsString::from);
                    let value = value.map_or_else(|v| v, OsString::from);
                    env.raw.insert(key, value);
                }
            }
        }
        env
    }

    /// Sets (or overwrites) an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        // An existing key keeps its spelling, so Windows `Path` stays `Path`
        let key = EnvKey::new(key);
        self.raw.remove(OsStr::new(key.as_str()));
        self.vars.insert(key, value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable. Absent keys are ignored.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self.raw.remove(OsStr::new(key));
        self
    }

    /// Splits a path-list variable into its non-blank segments.
    ///
    /// Empty and whitespace-only segments are dropped; a missing variable
    /// yields an empty list.
    #[must_use]
    pub fn split_path(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(PATH_SEPARATOR)
                    .filter(|segment| !segment.trim().is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Prepends a segment to the path-list variable `key`.
    pub fn prepend_path(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.modify_path(key, value.into(), PathPosition::Front)
    }

    /// Appends a segment to the path-list variable `key`.
    pub fn append_path(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.modify_path(key, value.into(), PathPosition::Back)
    }

    fn modify_path(&mut self, key: &str, value: String, position: PathPosition) -> &mut Self {
        let mut segments = self.split_path(key);
        match position {
            PathPosition::Front => segments.insert(0, value),
            PathPosition::Back => segments.push(value),
        }

        let mut joined = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                joined.push(PATH_SEPARATOR);
            }
            joined.push_str(segment);
        }

        self.set(key, joined)
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over the Unicode environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over every variable, non-Unicode ones included.
    pub fn iter_os(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.iter()
            .map(|(k, v)| (OsStr::new(k), OsStr::new(v)))
            .chain(self.raw.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.raw.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len() + self.raw.len()
    }
}
