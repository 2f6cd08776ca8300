// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! ```text
//! is_path_repository --> git rev-parse               exit 0 ?
//! commit_id          --> git rev-parse [--short] HEAD
//! ```

use std::path::Path;
use tracing::debug;

use super::shell::{git, git_output};
use crate::error::MupResult;

/// Returns true if `path` lies inside a git repository.
///
/// # Errors
///
/// Returns a filesystem error if `path` does not exist, or an error if
/// `git` cannot be started.
pub fn is_path_repository(path: impl AsRef<Path>) -> MupResult<bool> {
    let path = path.as_ref();
    let result = git(&["rev-parse"], path)?;
    debug!(path = %path.display(), repository = result.success(), "repository check");
    Ok(result.success())
}

/// Returns the commit id of `HEAD`, abbreviated if `short`.
///
/// # Errors
///
/// Returns `GitError::CommandFailed` with git's stderr if `HEAD` cannot be
/// resolved.
pub fn commit_id(path: impl AsRef<Path>, short: bool) -> MupResult<String> {
    let args: &[&str] = if short {
        &["rev-parse", "--short", "HEAD"]
    } else {
        &["rev-parse", "HEAD"]
    };
    git_output(args, path.as_ref())
}
