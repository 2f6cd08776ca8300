// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Run | Mkdir | Find | UniqueName | Open | Git | Options | Configs
//! ```

use std::process::ExitCode;

use mup_rs::cli::global::GlobalOptions;
use mup_rs::cli::{self, Command};
use mup_rs::cmd::config::{run_configs_command, run_options_command};
use mup_rs::cmd::fs::{
    run_find_command, run_mkdir_command, run_open_command, run_unique_name_command,
};
use mup_rs::cmd::git::run_git_command;
use mup_rs::cmd::run::run_run_command;
use mup_rs::config::loader::ConfigLoader;
use mup_rs::config::{Config, LOCAL_CONFIG_FILE};
use mup_rs::logging::init_logging;
use mup_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match build_config_loader(&cli.global).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.log_level);

    let log_file = global
        .log_file
        .as_ref()
        .or(config.global.log_file.as_ref())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(LogLevel::TRACE)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Run(args)) => {
            return match run_run_command(args, config) {
                Ok(code) => child_exit_code(code),
                Err(e) => report(&e),
            };
        }
        Some(Command::Mkdir(args)) => run_mkdir_command(args),
        Some(Command::Find(args)) => run_find_command(args),
        Some(Command::UniqueName(args)) => run_unique_name_command(args, config),
        Some(Command::Open(args)) => run_open_command(args),
        Some(Command::Git(args)) => run_git_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

/// Maps a child's exit code onto ours; signals follow the shell's 128+N.
fn child_exit_code(code: i32) -> ExitCode {
    let code = if code < 0 {
        code.checked_neg().map_or(255, |signal| 128 + signal)
    } else {
        code
    };
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    if !global.no_local_config {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    loader.with_env_prefix("MUP")
}
