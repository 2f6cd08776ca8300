// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking process execution.
//!
//! ```text
//! CommandRunner::new() / in_dir(cwd) .with_env(env)
//!   .env_path_append/prepend .env_var_add/remove
//!   .run(cmd) / .run_with(cmd, RunOptions)
//!       --> std::process::Command (no shell)
//!       --> CommandResult { exit_code, stdout, stderr }
//!
//! open_file(path) --> ShellExecuteW | open | xdg-open
//! ```

pub mod command;
pub mod open;
pub mod runner;
