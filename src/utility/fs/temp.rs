// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped temporary directories.
//!
//! ```text
//! TempPath::new()  --> mkdtemp("mup-XXXXXX")
//!   ... use path() ...
//! close() / Drop   --> remove_dir_all_writable()
//!                        PermissionDenied --> widen permissions, retry once
//! ```

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::error::{FsError, MupError, MupResult};

/// A fresh temporary directory that is removed when the guard goes away.
#[derive(Debug)]
pub struct TempPath {
    path: PathBuf,
    removed: bool,
}

impl TempPath {
    /// Creates a new, empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new() -> MupResult<Self> {
        let path = tempfile::Builder::new().prefix("mup-").tempdir()?.keep();
        trace!(path = %path.display(), "created temp dir");
        Ok(Self {
            path,
            removed: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the directory and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if anything could not be removed.
    pub fn close(mut self) -> MupResult<()> {
        self.removed = true;
        remove_dir_all_writable(&self.path)
    }
}

impl AsRef<Path> for TempPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_dir_all_writable(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove temp dir");
        }
    }
}

/// Runs `body` with a temporary directory and removes it afterwards.
///
/// The body's error takes precedence over a cleanup error.
///
/// # Errors
///
/// Returns the body's error, or the cleanup error if the body succeeded.
pub fn temp_path<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce(&Path) -> Result<T, E>,
    E: From<MupError>,
{
    let temp = TempPath::new()?;
    let result = body(temp.path());
    let cleanup = temp.close();
    let value = result?;
    cleanup?;
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    ListDir,
    RemoveFile,
    RemoveDir,
}

/// Removes `path` recursively, tolerating read-only entries.
///
/// # Errors
///
/// Returns an error if an entry cannot be removed even after its
/// permissions were widened.
pub fn remove_dir_all_writable(path: &Path) -> MupResult<()> {
    trace!(path = %path.display(), "remove tree");
    remove_tree(path, None)
}

/// `parent` is the enclosing directory when it belongs to the tree being
/// removed; the top-level parent is never touched.
fn remove_tree(dir: &Path, parent: Option<&Path>) -> MupResult<()> {
    let entries = retry_denied(dir, Operation::ListDir, None, || fs::read_dir(dir))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| FsError::from_io(&path, e))?;

        if file_type.is_dir() {
            remove_tree(&path, Some(dir))?;
        } else {
            retry_denied(&path, Operation::RemoveFile, Some(dir), || {
                fs::remove_file(&path)
            })?;
        }
    }
    retry_denied(dir, Operation::RemoveDir, parent, || fs::remove_dir(dir))
}

fn retry_denied<T>(
    path: &Path,
    operation: Operation,
    parent: Option<&Path>,
    mut attempt: impl FnMut() -> io::Result<T>,
) -> MupResult<T> {
    match attempt() {
        Ok(value) => Ok(value),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %path.display(), ?operation, "access denied, widening permissions");
            // unlinking needs write access on the containing directory
            if let Some(parent) = parent {
                make_writable(parent)?;
            }
            make_writable(path)?;
            attempt().map_err(|e| FsError::from_io(path, e).into())
        }
        Err(e) => Err(FsError::from_io(path, e).into()),
    }
}

fn make_writable(path: &Path) -> MupResult<()> {
    let mut permissions = fs::metadata(path)
        .map_err(|e| FsError::from_io(path, e))?
        .permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(0o777);
    }
    #[cfg(not(unix))]
    #[allow(clippy::permissions_set_readonly_false)]
    {
        permissions.set_readonly(false);
    }

    fs::set_permissions(path, permissions).map_err(|e| FsError::from_io(path, e).into())
}
