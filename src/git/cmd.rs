// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository-modifying commands.

use std::path::{Path, PathBuf};
use tracing::info;

use super::shell::git;
use crate::error::{GitError, MupResult};

/// Branch checked out by [`clone`] when none is configured.
pub const DEFAULT_BRANCH: &str = "master";

/// Clones `url` into `destination/<name>` and returns that path.
///
/// `<name>` is the last segment of `url` without its extension, so both
/// `https://host/org/tool.git` and `/srv/repos/tool` clone into `tool`.
///
/// # Errors
///
/// Returns `GitError::CloneFailed` with git's stderr if the clone fails,
/// or if no name can be derived from `url`.
pub fn clone(url: &str, destination: impl AsRef<Path>, branch: &str) -> MupResult<PathBuf> {
    let name = Path::new(url)
        .file_stem()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| GitError::CloneFailed {
            url: url.to_string(),
            message: "cannot derive a directory name from the url".to_string(),
        })?;
    let target = destination.as_ref().join(name);
    let target_str = target.to_string_lossy().into_owned();

    info!(url, branch, path = %target.display(), "cloning");
    let cwd = std::env::current_dir()?;
    let result = git(&["clone", "-b", branch, url, target_str.as_str()], &cwd)?;
    if !result.success() {
        return Err(GitError::CloneFailed {
            url: url.to_string(),
            message: result.stderr().unwrap_or_default().trim().to_string(),
        }
        .into());
    }

    Ok(target)
}
