// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Open a file with the desktop's default application.
//!
//! ```text
//! Platform::current()   (checked on every call)
//!   Windows --> ShellExecuteW("open", path)
//!   Darwin  --> open <path>
//!   Other   --> xdg-open <path>
//! ```

use std::path::Path;
use tracing::{debug, warn};

use super::command::CommandLine;
use super::runner::{CommandRunner, RunOptions};
use crate::error::MupResult;

/// Launcher family of an operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Darwin,
    /// Everything else, assumed to follow freedesktop conventions.
    Other,
}

impl Platform {
    /// Detects the platform of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::Darwin,
            _ => Self::Other,
        }
    }

    /// Returns the launcher command for `path`, or `None` when the platform
    /// opens files through a native API instead of a child process.
    #[must_use]
    pub fn opener_command(self, path: &Path) -> Option<CommandLine> {
        match self {
            Self::Windows => None,
            Self::Darwin => Some(CommandLine::new("open").arg(path)),
            Self::Other => Some(CommandLine::new("xdg-open").arg(path)),
        }
    }
}

/// Opens `path` with the default application of the current platform.
///
/// # Errors
///
/// Returns an error if the launcher cannot be started.
pub fn open_file(path: impl AsRef<Path>) -> MupResult<()> {
    open_file_on(Platform::current(), path.as_ref())
}

/// Opens `path` using the launcher of `platform`.
///
/// The launcher's exit status is only logged.
///
/// # Errors
///
/// Returns an error if the launcher cannot be started, or if `platform`
/// needs a native API that this build does not have.
pub fn open_file_on(platform: Platform, path: &Path) -> MupResult<()> {
    debug!(path = %path.display(), ?platform, "open file");

    let Some(command) = platform.opener_command(path) else {
        return shell_open(path);
    };

    let options = RunOptions::builder().with_silent(false).build();
    let result = CommandRunner::new()?.run_with(command, &options)?;
    if !result.success() {
        warn!(
            path = %path.display(),
            exit_code = result.exit_code(),
            "launcher reported failure"
        );
    }
    Ok(())
}

#[cfg(windows)]
fn shell_open(path: &Path) -> MupResult<()> {
    use windows::Win32::UI::Shell::ShellExecuteW;
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
    use windows::core::{HSTRING, PCWSTR, w};

    let file = HSTRING::from(path.as_os_str());

    // SAFETY: `file` and the literal operation outlive the call.
    let instance = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            PCWSTR(file.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // Values <= 32 are error codes
    if instance.0 as isize <= 32 {
        return Err(std::io::Error::last_os_error().into());
    }
    Ok(())
}

#[cfg(not(windows))]
fn shell_open(_path: &Path) -> MupResult<()> {
    Err(crate::error::ProcessError::Unsupported {
        operation: "shell open".to_string(),
        platform: std::env::consts::OS.to_string(),
    }
    .into())
}
