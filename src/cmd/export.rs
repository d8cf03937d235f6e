// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation.

use std::path::PathBuf;

use crate::cli::vars::ExportArgs;
use crate::config::Config;
use crate::core::store::VarStore;
use crate::error::{EnvoyError, EnvoyResult};
use crate::utility::path::expand_home;

/// Destination for `export`: the argument, else `session.default_export`,
/// with `~/` expanded.
#[must_use]
pub fn export_path(args: &ExportArgs, config: &Config) -> PathBuf {
    let path = args
        .path
        .as_ref()
        .unwrap_or(&config.session.default_export);
    expand_home(path, dirs::home_dir().as_deref())
}

/// Writes `store` to the export destination and returns the path written.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_store(store: &VarStore, args: &ExportArgs, config: &Config) -> EnvoyResult<PathBuf> {
    store
        .export(export_path(args, config))
        .map_err(EnvoyError::from)
}

/// Main handler for export command.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn run_export_command(args: &ExportArgs, config: &Config) -> EnvoyResult<()> {
    let written = export_store(&VarStore::from_process(), args, config)?;
    println!("Wrote {}", written.display());
    Ok(())
}
