// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{RunnerConfig, UniqueNameConfig, parse_key_value};
use super::{Config, ConfigLoader};
use crate::core::env::container::Env;
use crate::core::process::runner::CommandRunner;
use crate::logging::LogLevel;
use crate::utility::fs::unique::UniqueMode;

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    git.branch                 = master
    global.log_level           = 3
    unique_name.delimiter      = -
    unique_name.length         = 8
    unique_name.max_iterations = 9999
    unique_name.mode           = random
    ");
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
log_level = 4
log_file = "logs/mup.log"

[unique_name]
mode = "integer"
length = 5
delimiter = "_"

[git]
branch = "main"

[runner]
env = ["FOO=bar"]
path_append = ["PATH=/opt/tools"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.unique_name.mode, UniqueMode::Integer);
    assert_eq!(config.unique_name.length, Some(5));
    assert_eq!(config.unique_name.max_iterations, 9999);
    assert_eq!(config.git.branch, "main");
    assert_eq!(config.runner.env, vec!["FOO=bar".to_string()]);
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(Config::parse("[git]\nremote = \"origin\"\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Config::parse("[global]\nlog_level = 9\n").is_err());
    assert!(Config::parse("[unique_name]\nmode = \"sequential\"\n").is_err());

    let err = Config::parse("[unique_name]\nmax_iterations = 0\n").unwrap_err();
    assert!(err.to_string().contains("max_iterations"));

    let err = Config::parse("[runner]\nenv = [\"NOVALUE\"]\n").unwrap_err();
    assert!(err.to_string().contains("expected KEY=VALUE"));
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nbranch = \"main\"\n")
        .set("git.branch", "release")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.branch, "release");
}

#[test]
fn test_loader_tracks_files() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("present.toml");
    std::fs::write(&present, "[git]\nbranch = \"dev\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&present)
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_str("");
    assert_eq!(loader.loaded_files().len(), 2);
    assert!(loader.format_loaded_files()[0].starts_with("1. [file] "));

    let config = loader.build().unwrap();
    assert_eq!(config.git.branch, "dev");
}

#[test]
fn test_loader_missing_required_file() {
    let temp = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_unique_name_config_to_options() {
    let section = UniqueNameConfig {
        mode: UniqueMode::Integer,
        length: None,
        delimiter: ".".to_string(),
        max_iterations: 10,
    };
    let options = section.to_options(true);

    assert_eq!(options.mode(), UniqueMode::Integer);
    assert_eq!(options.length(), 3);
    assert_eq!(options.delimiter(), ".");
    assert_eq!(options.max_iterations(), 10);
    assert!(options.force());
}

#[test]
fn test_parse_key_value() {
    assert_eq!(parse_key_value("env", "A=b=c").unwrap(), ("A", "b=c"));
    assert_eq!(parse_key_value("env", "EMPTY=").unwrap(), ("EMPTY", ""));
    assert!(parse_key_value("env", "=value").is_err());
    assert!(parse_key_value("env", "plain").is_err());
}

#[test]
fn test_runner_config_apply() {
    let runner_config = RunnerConfig {
        env: vec!["FOO=bar".to_string(), "GONE=soon".to_string()],
        unset: vec!["GONE".to_string()],
        path_prepend: vec!["TOOLS=/first".to_string()],
        path_append: vec!["TOOLS=/last".to_string()],
    };

    let mut runner = CommandRunner::in_dir(std::env::temp_dir()).with_env(Env::new());
    runner_config.apply(&mut runner).unwrap();

    let env = runner.env();
    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("GONE"), None);
    assert_eq!(
        env.split_path("TOOLS"),
        vec!["/first".to_string(), "/last".to_string()]
    );
}
