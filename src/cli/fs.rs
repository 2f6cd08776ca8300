// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem command arguments.
//!
//! ```text
//! mkdir PATH [--file]
//! find ROOT PATTERN.. [-r]
//! unique-name PATH [--mode M] [--length N] [--delimiter D]
//!                  [--max-iterations N] [--force]
//! open PATH
//! ```

use clap::Args;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;

fn positive() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

/// Arguments for the `mkdir` command.
#[derive(Debug, Clone, Args)]
pub struct MkdirArgs {
    /// Directory to create.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// PATH names a file; only its parent directories are created.
    #[arg(long)]
    pub file: bool,
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Directory to search.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Glob patterns matched against file names (`*`, `?`, `[seq]`, `[!seq]`).
    #[arg(value_name = "PATTERN", required = true, num_args = 1..)]
    pub patterns: Vec<String>,

    /// Searches subdirectories too.
    #[arg(short = 'r', long)]
    pub recursive: bool,
}

/// Arguments for the `unique-name` command.
#[derive(Debug, Clone, Args)]
pub struct UniqueNameArgs {
    /// Candidate path.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Suffix mode: random or integer.
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Suffix length.
    #[arg(short = 'n', long, value_name = "N", value_parser = positive())]
    pub length: Option<usize>,

    /// Text between the name and the suffix.
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub delimiter: Option<String>,

    /// Gives up after this many attempts.
    #[arg(long = "max-iterations", value_name = "N", value_parser = positive())]
    pub max_iterations: Option<usize>,

    /// Generates a new name even if PATH is free.
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// Arguments for the `open` command.
#[derive(Debug, Clone, Args)]
pub struct OpenArgs {
    /// File or directory to open.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
