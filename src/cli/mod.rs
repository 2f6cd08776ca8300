// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for mup-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! mup [global options] <command>
//! version | options | configs
//! run [-e K=V].. -- PROGRAM [ARGS..]
//! mkdir PATH [--file]
//! find ROOT PATTERN.. [-r]
//! unique-name PATH [--mode M] ..
//! open PATH
//! git {is-repo|commit-id|clone}
//! ```

pub mod fs;
pub mod git;
pub mod global;
pub mod run;


use crate::cli::fs::{FindArgs, MkdirArgs, OpenArgs, UniqueNameArgs};
use crate::cli::git::GitArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;
use clap::{Parser, Subcommand};

/// Multi-purpose Utility Pack
///
/// Filesystem helpers, a command runner and a thin git wrapper.
#[derive(Debug, Parser)]
#[command(
    name = "mup",
    author,
    version,
    about = "Multi-purpose Utility Pack",
    long_about = "mup-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Small filesystem, process and git helpers behind one binary.\n\
                  See `mup <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  Files given with --config are loaded first, in order. A `mup.toml`\n\
                  in the current directory is loaded after them unless\n\
                  --no-local-config is set. MUP_<SECTION>__<KEY> environment\n\
                  variables override both, and command flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in load order.
    Configs,

    /// Runs a program without a shell and relays its exit code.
    Run(RunArgs),

    /// Creates a directory chain.
    Mkdir(MkdirArgs),

    /// Lists files whose names match glob patterns.
    Find(FindArgs),

    /// Prints a path that does not collide with an existing file.
    #[command(name = "unique-name")]
    UniqueName(UniqueNameArgs),

    /// Opens a file with the desktop's default application.
    Open(OpenArgs),

    /// Queries and clones git repositories.
    Git(GitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
