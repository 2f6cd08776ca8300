// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!          core
//!           |
//!     +-----+-----+
//!     |           |
//!     v           v
//!    env       process
//!     |           |
//!    Env      CommandRunner
//!    PATH     CommandResult
//!    lists    open_file
//! ```

pub mod env;
pub mod process;
