// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the non-interactive variable commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Destination file. Defaults to `session.default_export`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only show variables whose name or value contains this text
    /// (case-insensitive).
    #[arg(short = 'f', long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Print a JSON object instead of dotenv lines.
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for `check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Dotenv file to parse.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Also print values.
    #[arg(short = 'v', long = "values")]
    pub values: bool,
}
