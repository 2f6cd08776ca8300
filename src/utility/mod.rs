// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   create_directories()  mkdir -p, idempotent
//!   walk:     find_files()       lazy glob search
//!   unique:   get_unique_name()  collision-free names
//!   temp:     TempPath           scoped temp dirs
//! ```

pub mod fs;
