// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command arguments.
//!
//! ```text
//! mup run [--cwd DIR] [-e K=V].. [-u K].. [--path-prepend K=V]..
//!         [--path-append K=V].. [--no-capture] -- PROGRAM [ARGS..]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Working directory (defaults to the current one).
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Sets a variable for the child.
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub env: Vec<(String, String)>,

    /// Removes a variable from the child's environment.
    #[arg(short = 'u', long = "unset", value_name = "KEY")]
    pub unset: Vec<String>,

    /// Puts VALUE first in the path-list variable KEY.
    #[arg(long = "path-prepend", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub path_prepend: Vec<(String, String)>,

    /// Puts VALUE last in the path-list variable KEY.
    #[arg(long = "path-append", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub path_append: Vec<(String, String)>,

    /// Lets the child write to the terminal instead of capturing its output.
    #[arg(long = "no-capture")]
    pub no_capture: bool,

    /// Program and its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Parses `KEY=VALUE`.
///
/// # Errors
///
/// Returns a message if there is no `=` or the key is empty.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
