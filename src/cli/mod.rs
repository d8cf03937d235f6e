// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envoy using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envoy [global options] [command]
//! edit            (default) interactive editor
//! export [PATH]
//! list [--filter Q]
//! check PATH
//! options
//! version
//! ```

pub mod global;
pub mod vars;


use crate::cli::global::GlobalOptions;
use crate::cli::vars::{CheckArgs, ExportArgs, ListArgs};
use clap::{Parser, Subcommand};

/// Modal environment variable editor.
#[derive(Debug, Parser)]
#[command(
    name = "envoy",
    author,
    version,
    about = "Modal environment variable editor",
    long_about = "envoy Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Browse, filter, edit, import and export environment variables\n\
                  with vim-style keys. Run without a command to open the editor.",
    after_help = "KEYS:\n\n\
                  [count]j/k move, h/l/0/$ columns, gg/G first/last row,\n\
                  / search, n/N cycle, i/a edit, A add, x delete, : command.\n\n\
                  COMMANDS:\n\n\
                  :w [path]  :q  :wq [path]  :x [path]  :import <path>  :e  :help"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Opens the interactive editor (default).
    Edit,

    /// Writes the current environment to a dotenv file.
    Export(ExportArgs),

    /// Prints the current environment in dotenv format.
    List(ListArgs),

    /// Parses a dotenv file without applying it.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
