// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command implementation for mup-rs.

use crate::cli::git::{GitArgs, GitSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::git::{clone, commit_id, is_path_repository};

/// Main handler for git command.
///
/// # Errors
///
/// Returns an error if any git operation fails.
pub fn run_git_command(args: &GitArgs, config: &Config) -> Result<()> {
    match &args.subcommand {
        GitSubcommand::IsRepo(ir) => {
            println!("{}", is_path_repository(&ir.path)?);
            Ok(())
        }
        GitSubcommand::CommitId(ci) => {
            println!("{}", commit_id(&ci.path, ci.short)?);
            Ok(())
        }
        GitSubcommand::Clone(cl) => {
            let branch = cl.branch.as_deref().unwrap_or(&config.git.branch);
            let path = clone(&cl.url, &cl.destination, branch)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
