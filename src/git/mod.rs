// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!     query.rs          cmd.rs
//!  is_path_repository   clone
//!  commit_id              |
//!         \               |
//!          v              v
//!     shell.rs: git(args, cwd)
//!       CommandRunner + GCM_INTERACTIVE=never, GIT_TERMINAL_PROMPT=0
//!          |
//!          v
//!        git (PATH)
//! ```

pub mod cmd;
pub mod query;
pub mod shell;

pub use cmd::{DEFAULT_BRANCH, clone};
pub use query::{commit_id, is_path_repository};
pub use shell::is_git_available;

#[cfg(test)]
mod tests;
