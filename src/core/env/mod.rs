// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (owned BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/remove/prepend_path/append_path
//! ```
//!
//! - **Case-insensitive on Windows**
//! - **Private copies**: the real process environment is never modified

pub mod container;
pub mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
///
/// Variables that are not valid Unicode are carried along unchanged.
#[must_use]
pub fn current_env() -> container::Env {
    container::Env::from_vars_os(std::env::vars_os())
}
