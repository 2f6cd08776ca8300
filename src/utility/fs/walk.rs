// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lazy file search by base-name pattern.
//!
//! ```text
//! find_files(root, patterns, recursive)
//!   recursive  --> ignore::Walk (no filters, sorted, top-down)
//!   flat       --> std::fs::read_dir(root)
//!        |
//!        v
//!   regular files whose base name matches FilePattern
//! ```

use ignore::{Walk, WalkBuilder};
use std::fs::{FileType, ReadDir};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

use super::pattern::{FilePattern, Patterns};
use crate::error::{FsError, MupResult};

enum Entries {
    Flat(ReadDir),
    Tree(Walk),
}

/// Iterator over files found by [`find_files`].
///
/// Entries that cannot be read are logged and skipped.
pub struct FindFiles {
    pattern: FilePattern,
    entries: Entries,
}

impl std::fmt::Debug for FindFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.entries {
            Entries::Flat(_) => "flat",
            Entries::Tree(_) => "recursive",
        };
        f.debug_struct("FindFiles")
            .field("pattern", &self.pattern.as_str())
            .field("mode", &mode)
            .finish()
    }
}

impl FindFiles {
    fn next_file(&mut self) -> Option<PathBuf> {
        loop {
            match &mut self.entries {
                Entries::Flat(read_dir) => match read_dir.next()? {
                    Ok(entry) => {
                        let path = entry.path();
                        if path.is_file() {
                            return Some(path);
                        }
                    }
                    Err(e) => warn!(error = %e, "skipping unreadable entry"),
                },
                Entries::Tree(walk) => match walk.next()? {
                    Ok(entry) => {
                        if entry.file_type().is_some_and(|ft| is_file(ft, entry.path())) {
                            return Some(entry.into_path());
                        }
                    }
                    Err(e) => warn!(error = %e, "walk error"),
                },
            }
        }
    }
}

impl Iterator for FindFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let path = self.next_file()?;
            let matched = path
                .file_name()
                .is_some_and(|name| self.pattern.is_match(&name.to_string_lossy()));
            if matched {
                return Some(path);
            }
        }
    }
}

/// Symlinks count as files when their target is one.
fn is_file(file_type: FileType, path: &Path) -> bool {
    file_type.is_file() || (file_type.is_symlink() && path.is_file())
}

/// Finds files under `root` whose base name matches any of `patterns`.
///
/// With `recursive`, every directory below `root` is searched, hidden and
/// ignored entries included. Otherwise only the direct children of `root`
/// are considered. Results are produced lazily; each path is `root` joined
/// with the file's location relative to it.
///
/// # Errors
///
/// Returns an error if `root` cannot be read, is not a directory, or no
/// valid pattern is given.
///
/// # Example
/// ```no_run
/// use mup_rs::utility::fs::walk::find_files;
///
/// for path in find_files("/path/to/project", ["*.rs", "*.toml"], true)? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files(
    root: impl AsRef<Path>,
    patterns: impl Into<Patterns>,
    recursive: bool,
) -> MupResult<FindFiles> {
    let root = root.as_ref();
    let pattern = FilePattern::new(patterns)?;
    trace!(root = %root.display(), regex = pattern.as_str(), recursive, "find files");

    let entries = if recursive {
        let metadata = std::fs::metadata(root).map_err(|e| FsError::from_io(root, e))?;
        // same outcome as read_dir on a file
        if !metadata.is_dir() {
            return Err(FsError::IoError {
                path: root.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotADirectory),
            }
            .into());
        }
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();
        Entries::Tree(walk)
    } else {
        Entries::Flat(std::fs::read_dir(root).map_err(|e| FsError::from_io(root, e))?)
    };

    Ok(FindFiles { pattern, entries })
}
