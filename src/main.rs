// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Edit | Export | List | Check | Options | Version
//! ```

use std::process::ExitCode;

use envoy::cli::global::GlobalOptions;
use envoy::cli::{self, Command};
use envoy::cmd::check::run_check_command;
use envoy::cmd::config::run_options_command;
use envoy::cmd::edit::run_edit_command;
use envoy::cmd::export::run_export_command;
use envoy::cmd::list::run_list_command;
use envoy::config::loader::ConfigLoader;
use envoy::config::{CONFIG_FILE_NAME, Config};
use envoy::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of environment variables that override configuration values.
const ENV_PREFIX: &str = "ENVOY";

fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = build_config_loader(&cli.global);
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut log_config = cli.global.log_config(&config.global);
    if matches!(cli.command, None | Some(Command::Edit)) {
        // the editor owns the screen
        log_config = log_config.without_console();
    }
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config, config_files);
            Ok(())
        }
        Some(Command::Edit) | None => run_edit_command(config),
        Some(Command::Export(args)) => run_export_command(args, config).map_err(Into::into),
        Some(Command::List(args)) => run_list_command(args).map_err(Into::into),
        Some(Command::Check(args)) => run_check_command(args).map_err(Into::into),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(CONFIG_FILE_NAME);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}
