// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem commands: mkdir, find, unique-name, open.

use tracing::info;

use crate::cli::fs::{FindArgs, MkdirArgs, OpenArgs, UniqueNameArgs};
use crate::config::Config;
use crate::core::process::open::open_file;
use crate::error::Result;
use crate::utility::fs::create_directories;
use crate::utility::fs::unique::{UniqueMode, UniqueNameOptions, get_unique_name};
use crate::utility::fs::walk::find_files;

/// Handler for `mkdir`.
///
/// # Errors
///
/// Returns an error if a directory in the chain cannot be created.
pub fn run_mkdir_command(args: &MkdirArgs) -> Result<()> {
    create_directories(&args.path, args.file)?;
    info!(path = %args.path.display(), file = args.file, "directories ready");
    Ok(())
}

/// Handler for `find`; prints one path per line.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or the root cannot be read.
pub fn run_find_command(args: &FindArgs) -> Result<()> {
    let files = find_files(&args.root, args.patterns.as_slice(), args.recursive)?;
    for path in files {
        println!("{}", path.display());
    }
    Ok(())
}

/// Handler for `unique-name`.
///
/// # Errors
///
/// Returns an error for an unknown mode or when every candidate is taken.
pub fn run_unique_name_command(args: &UniqueNameArgs, config: &Config) -> Result<()> {
    let options = unique_name_options(args, config)?;
    let path = get_unique_name(&args.path, &options)?;
    println!("{}", path.display());
    Ok(())
}

/// Merges `[unique_name]` defaults with the flags given on the command line.
///
/// # Errors
///
/// Returns an error if `--mode` names an unknown mode.
pub fn unique_name_options(args: &UniqueNameArgs, config: &Config) -> Result<UniqueNameOptions> {
    let section = &config.unique_name;
    let mode = match &args.mode {
        Some(mode) => mode.parse::<UniqueMode>()?,
        None => section.mode,
    };
    // a configured length belongs to the configured mode
    let length = args
        .length
        .or_else(|| if mode == section.mode { section.length } else { None });

    Ok(UniqueNameOptions::builder()
        .with_mode(mode)
        .maybe_with_length(length)
        .with_delimiter(args.delimiter.as_deref().unwrap_or(&section.delimiter))
        .with_max_iterations(args.max_iterations.unwrap_or(section.max_iterations))
        .with_force(args.force)
        .build())
}

/// Handler for `open`.
///
/// # Errors
///
/// Returns an error if the path does not exist or no launcher could start.
pub fn run_open_command(args: &OpenArgs) -> Result<()> {
    if !args.path.exists() {
        anyhow::bail!("no such file or directory: {}", args.path.display());
    }
    open_file(&args.path)?;
    Ok(())
}
