// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-glob patterns compiled to one regular expression.
//!
//! ```text
//! "*.txt", "file?.py"
//!     |  translate() each
//!     v
//! (?s:.*\.txt) | (?s:file.\.py)
//!     |  join, anchor both ends
//!     v
//! ^(?:(?s:.*\.txt)|(?s:file.\.py))$   --> FilePattern::is_match(base name)
//! ```
//!
//! `*` any run, `?` one character, `[seq]` / `[!seq]` character classes,
//! everything else literal. An unterminated `[` is a literal bracket.

use regex::{Regex, RegexBuilder};

use crate::error::{ConfigError, MupResult};

/// Never matches anything; used for classes whose ranges are all reversed.
const EMPTY_CLASS: &str = r"[^\x00-\x{10FFFF}]";

/// One or more glob patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns(Vec<String>);

impl Patterns {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_owned()])
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Patterns {
    fn from(patterns: Vec<S>) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_owned()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Patterns {
    fn from(patterns: &[S]) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_owned()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Patterns {
    fn from(patterns: [S; N]) -> Self {
        Self(patterns.iter().map(|p| p.as_ref().to_owned()).collect())
    }
}

/// Compiled alternation of glob patterns, matched against whole names.
#[derive(Debug, Clone)]
pub struct FilePattern {
    regex: Regex,
}

impl FilePattern {
    /// Compiles `patterns` into a single matcher.
    ///
    /// Matching is case-insensitive on Windows.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidPattern` if no pattern is given or the
    /// combined expression cannot be compiled.
    pub fn new(patterns: impl Into<Patterns>) -> MupResult<Self> {
        let patterns = patterns.into();
        if patterns.as_slice().is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: String::new(),
                message: "no patterns given".to_string(),
            }
            .into());
        }

        let alternation = patterns
            .as_slice()
            .iter()
            .map(|p| translate(p))
            .collect::<Vec<_>>()
            .join("|");
        let expression = format!("^(?:{alternation})$");

        let regex = RegexBuilder::new(&expression)
            .case_insensitive(cfg!(windows))
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: patterns.as_slice().join(", "),
                message: e.to_string(),
            })?;

        Ok(Self { regex })
    }

    /// Returns true if `name` matches one of the patterns in full.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Returns the compiled expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Translates one glob pattern into an (unanchored) regular expression.
#[must_use]
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Collapse runs of stars
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    format!("(?s:{out})")
}

/// Finds the `]` closing a class whose body starts at `start`.
///
/// A leading `!` and a `]` right after it (or at the start) belong to the body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

fn translate_class(body: &[char]) -> String {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut k = 0;
    while k < body.len() {
        let lo = body[k];
        if k + 2 < body.len() && body[k + 1] == '-' {
            let hi = body[k + 2];
            k += 3;
            // Reversed ranges match nothing
            if lo <= hi {
                items.push_str(&class_char(lo));
                items.push('-');
                items.push_str(&class_char(hi));
            }
        } else {
            items.push_str(&class_char(lo));
            k += 1;
        }
    }

    match (negated, items.is_empty()) {
        (true, true) => ".".to_string(),
        (false, true) => EMPTY_CLASS.to_string(),
        (true, false) => format!("[^{items}]"),
        (false, false) => format!("[{items}]"),
    }
}

/// Escapes a character that has meaning inside a regex class.
fn class_char(c: char) -> String {
    match c {
        '\\' | '[' | ']' | '^' | '-' | '&' | '~' => format!("\\{c}"),
        _ => c.to_string(),
    }
}
