// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::current_env;
use crate::core::env::container::Env;
use crate::core::env::types::PATH_SEPARATOR;
use std::collections::BTreeMap;

fn joined(parts: &[&str]) -> String {
    parts.join(&PATH_SEPARATOR.to_string())
}

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);

    env.set("FOO", "baz");
    assert_eq!(env.get("FOO"), Some("baz"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_key_case() {
    let mut env = Env::new();
    env.set("Path", "value");

    if cfg!(windows) {
        assert_eq!(env.get("PATH"), Some("value"));
        env.set("PATH", "other");
        assert_eq!(env.len(), 1);
        // The first spelling is kept
        assert!(env.to_map().contains_key("Path"));
    } else {
        assert_eq!(env.get("PATH"), None);
    }
}

#[test]
fn test_env_remove_absent_is_noop() {
    let mut env = Env::new();
    env.set("KEEP", "1");
    env.remove("MISSING").remove("MISSING");
    assert_eq!(env.len(), 1);

    env.remove("KEEP");
    assert!(env.is_empty());
}

#[test]
fn test_env_path_append_prepend() {
    let mut env = Env::new();
    env.set("TOOLS", joined(&["/usr/bin", "", "  ", "/bin"]));

    env.append_path("TOOLS", "/opt/bin");
    assert_eq!(env.get("TOOLS"), Some(joined(&["/usr/bin", "/bin", "/opt/bin"]).as_str()));

    env.prepend_path("TOOLS", "/usr/local/bin");
    assert_eq!(
        env.split_path("TOOLS"),
        vec!["/usr/local/bin", "/usr/bin", "/bin", "/opt/bin"]
    );
}

#[test]
fn test_env_path_on_missing_variable() {
    let mut env = Env::new();
    assert!(env.split_path("NEW_PATH").is_empty());

    env.prepend_path("NEW_PATH", "/first");
    assert_eq!(env.get("NEW_PATH"), Some("/first"));
}

#[test]
fn test_env_clone_is_independent() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    env2.set("KEY2", "value2");
    env2.remove("KEY1");

    assert_eq!(env1.get("KEY1"), Some("value1"));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), None);
}

#[test]
fn test_current_env() {
    // PATH should exist in any test environment
    let env = current_env();
    assert!(env.get("PATH").is_some() || env.get("Path").is_some());
}

#[test]
fn test_env_to_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY2".to_string(), "value2".to_string());
    map.insert("KEY1".to_string(), "value1".to_string());

    let env = Env::from_map(map);
    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["KEY1", "KEY2"]);
    assert_eq!(env.to_map().get("KEY2").map(String::as_str), Some("value2"));
}

#[cfg(unix)]
#[test]
fn test_env_from_vars_os_keeps_non_unicode() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStringExt;

    let raw_value = OsString::from_vec(b"caf\xe9".to_vec());
    let raw_key = OsString::from_vec(b"K\xff".to_vec());
    let mut env = Env::from_vars_os([
        (OsString::from("PLAIN"), OsString::from("ok")),
        (OsString::from("LATIN1"), raw_value.clone()),
        (raw_key.clone(), OsString::from("v")),
    ]);

    assert_eq!(env.len(), 3);
    assert_eq!(env.get("PLAIN"), Some("ok"));
    assert_eq!(env.get("LATIN1"), None);
    assert_eq!(env.to_map().len(), 1);

    let all: BTreeMap<&OsStr, &OsStr> = env.iter_os().collect();
    assert_eq!(all[OsStr::new("LATIN1")], raw_value.as_os_str());
    assert_eq!(all[raw_key.as_os_str()], OsStr::new("v"));

    // a Unicode write replaces the raw entry of the same name
    env.set("LATIN1", "cafe");
    assert_eq!(env.get("LATIN1"), Some("cafe"));
    assert_eq!(env.len(), 3);

    env.remove("LATIN1");
    assert_eq!(env.iter_os().filter(|(k, _)| *k == "LATIN1").count(), 0);
    assert_eq!(env.len(), 2);
}
