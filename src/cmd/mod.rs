// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Config --> cmd::run_* handlers
//!   config (options, configs), fs, git, run
//! ```

pub mod config;
pub mod fs;
pub mod git;
pub mod run;
