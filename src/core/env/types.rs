// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path),
//!         case-sensitive elsewhere
//! PathPosition: Front | Back (for path-list edits)
//! PATH_SEPARATOR: ';' on Windows, ':' elsewhere
//! ```

use std::cmp::Ordering;

/// Separator between entries of a path-list variable.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Where a new segment goes in a path-list variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPosition {
    /// Insert before every existing segment.
    Front,
    /// Insert after every existing segment.
    Back,
}

/// An environment variable key, compared the way the host OS compares them.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> std::borrow::Cow<'_, str> {
        if cfg!(windows) {
            std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}
