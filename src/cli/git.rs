// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command arguments.
//!
//! # Subcommands
//!
//! ```text
//! git is-repo PATH
//!   → prints true/false
//! git commit-id PATH [--short]
//!   → HEAD revision
//! git clone URL DEST [-b BRANCH]
//!   → clones into DEST/<repo name>, prints the path
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `git` command.
#[derive(Debug, Clone, Args)]
pub struct GitArgs {
    /// Git subcommand.
    #[command(subcommand)]
    pub subcommand: GitSubcommand,
}

/// Git subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum GitSubcommand {
    /// Tells whether a directory is inside a git repository.
    #[command(name = "is-repo")]
    IsRepo(IsRepoArgs),

    /// Prints the commit id of HEAD.
    #[command(name = "commit-id")]
    CommitId(CommitIdArgs),

    /// Clones a repository.
    Clone(CloneArgs),
}

/// Arguments for is-repo subcommand.
#[derive(Debug, Clone, Args)]
pub struct IsRepoArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for commit-id subcommand.
#[derive(Debug, Clone, Args)]
pub struct CommitIdArgs {
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Prints the abbreviated id.
    #[arg(short = 's', long)]
    pub short: bool,
}

/// Arguments for clone subcommand.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository URL or path.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Directory that receives the clone.
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Branch to check out (defaults to git.branch).
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,
}
