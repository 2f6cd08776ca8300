// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Collision-free file names.
//!
//! ```text
//! get_unique_name("dir/report.txt", options)
//!   force=false and no such file --> dir/report.txt
//!   else for i in 1..=max_iterations:
//!     dir/report{delimiter}{suffix}.txt
//!       Random   suffix = length alphanumerics (fresh each try)
//!       Integer  suffix = i zero-padded to length
//!     first one that is not an existing file wins
//! ```

use bon::Builder;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{FsError, MupError, MupResult};

pub const DEFAULT_DELIMITER: &str = "-";
pub const DEFAULT_MAX_ITERATIONS: usize = 9999;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Suffix strategy for [`get_unique_name`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueMode {
    #[default]
    Random,
    Integer,
}

impl UniqueMode {
    /// Suffix length used when none is given.
    #[must_use]
    pub const fn default_length(self) -> usize {
        match self {
            Self::Random => 8,
            Self::Integer => 3,
        }
    }

    fn suffix(self, iteration: usize, length: usize) -> String {
        match self {
            Self::Random => {
                let mut rng = rand::thread_rng();
                (0..length)
                    .map(|_| char::from(ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())]))
                    .collect()
            }
            Self::Integer => format!("{iteration:0length$}"),
        }
    }
}

impl fmt::Display for UniqueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// Raw numeric mode values: `0` random, `1` integer.
impl TryFrom<u32> for UniqueMode {
    type Error = MupError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Random),
            1 => Ok(Self::Integer),
            other => Err(MupError::not_implemented(format!("unique name mode {other}"))),
        }
    }
}

impl FromStr for UniqueMode {
    type Err = MupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "integer" => Ok(Self::Integer),
            _ => Err(MupError::not_implemented(format!("unique name mode '{s}'"))),
        }
    }
}

/// Options for [`get_unique_name`].
#[derive(Debug, Clone, Builder)]
pub struct UniqueNameOptions {
    #[builder(setters(name = with_mode), default)]
    mode: UniqueMode,
    /// Suffix length (defaults per mode)
    #[builder(setters(name = with_length))]
    length: Option<usize>,
    #[builder(into, setters(name = with_delimiter), default = String::from(DEFAULT_DELIMITER))]
    delimiter: String,
    #[builder(setters(name = with_max_iterations), default = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Generate a new name even if the candidate is free
    #[builder(setters(name = with_force), default = false)]
    force: bool,
}

impl Default for UniqueNameOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl UniqueNameOptions {
    #[must_use]
    pub const fn mode(&self) -> UniqueMode {
        self.mode
    }

    /// Returns the suffix length, falling back to the mode's default.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.unwrap_or_else(|| self.mode.default_length())
    }

    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }
}

/// Returns a path next to `path` that does not name an existing file.
///
/// # Errors
///
/// Returns `FsError::UniqueNameExhausted` if every attempt collided.
pub fn get_unique_name(path: impl AsRef<Path>, options: &UniqueNameOptions) -> MupResult<PathBuf> {
    let path = path.as_ref();
    if !options.force() && !path.is_file() {
        return Ok(path.to_path_buf());
    }

    let stem = path.file_stem().unwrap_or_default();
    let extension = path.extension();
    let length = options.length();

    for iteration in 1..=options.max_iterations() {
        let mut name = OsString::from(stem);
        name.push(options.delimiter());
        name.push(options.mode().suffix(iteration, length));
        if let Some(extension) = extension {
            name.push(".");
            name.push(extension);
        }

        let candidate = path.with_file_name(name);
        if !candidate.is_file() {
            debug!(path = %candidate.display(), attempts = iteration, "unique name");
            return Ok(candidate);
        }
    }

    Err(FsError::UniqueNameExhausted {
        path: path.display().to_string(),
        attempts: options.max_iterations(),
    }
    .into())
}
