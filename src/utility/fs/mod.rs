// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers.
//!
//! ```text
//! create_directories()  full directory chain, "already exists" ignored
//! pattern:  FilePattern       glob --> one anchored regex
//! walk:     find_files()      ignore::Walk / read_dir, lazy
//! unique:   get_unique_name() Random | Integer suffixes
//! temp:     TempPath          mkdtemp + read-only tolerant removal
//! ```

pub mod pattern;
pub mod temp;
pub mod unique;
pub mod walk;


use std::io::ErrorKind;
use std::path::Path;
use tracing::trace;

use crate::error::{FsError, MupResult};

/// Creates `path` and all missing parents.
///
/// With `is_file`, `path` names a file and only its parent chain is created.
/// A bare file name has no parent, so nothing is done.
///
/// # Errors
///
/// Returns an error if a directory cannot be created for any reason other
/// than already existing.
pub fn create_directories(path: impl AsRef<Path>, is_file: bool) -> MupResult<()> {
    let path = path.as_ref();
    let dir = if is_file {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        }
    } else {
        path
    };

    trace!(path = %dir.display(), "create directories");
    match std::fs::create_dir_all(dir) {
        Err(e) if e.kind() != ErrorKind::AlreadyExists => Err(FsError::from_io(dir, e).into()),
        _ => Ok(()),
    }
}
