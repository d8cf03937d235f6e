// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ex-style command line interpreter.
//!
//! ```text
//! ":wq ~/out.env"
//!    | strip ':' + trim
//!    v
//! Command::parse  -> WriteQuit(Some("~/out.env"))
//!    |
//!    v
//! Interpreter::run(&VarStore) -> Outcome { status, quit }
//!
//! q quit        Quit                  w [path]      Write
//! wq [path]     WriteQuit             x [path]      Exit (write if dirty)
//! import <path> Import                e edit        Reload
//! help h ?      Help                  *             Unknown
//! ```
//!
//! Every outcome is a status line. Failures are reported in the status and
//! never escalate; only quit-type commands end a session.


use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::store::{DEFAULT_EXPORT_PATH, VarStore};
use crate::utility::path::expand_home;

/// Static usage text shown by `:help`.
pub const HELP_TEXT: &str = "Commands: :w [path] | :q | :wq | :x | :import <path> | :e | /search";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`, `quit`
    Quit,
    /// `w [path]`
    Write(Option<String>),
    /// `wq [path]`
    WriteQuit(Option<String>),
    /// `x [path]`
    Exit(Option<String>),
    /// `import <path>`
    Import(Option<String>),
    /// `e`, `edit`
    Reload,
    /// `help`, `h`, `?`
    Help,
    /// Any other verb.
    Unknown(String),
}

impl Command {
    /// Parses a command line, with or without its leading `:`.
    ///
    /// Returns `None` for blank input. Arguments after the verb are rejoined
    /// with single spaces so paths containing spaces survive.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let line = line.strip_prefix(':').unwrap_or(line);
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let rest = words.collect::<Vec<_>>().join(" ");
        let arg = (!rest.is_empty()).then_some(rest);

        Some(match verb {
            "q" | "quit" => Self::Quit,
            "w" => Self::Write(arg),
            "wq" => Self::WriteQuit(arg),
            "x" => Self::Exit(arg),
            "import" => Self::Import(arg),
            "e" | "edit" => Self::Reload,
            "help" | "h" | "?" => Self::Help,
            other => Self::Unknown(other.to_string()),
        })
    }

    /// Whether running this command ends the session.
    #[must_use]
    pub const fn quits(&self) -> bool {
        matches!(self, Self::Quit | Self::WriteQuit(_) | Self::Exit(_))
    }
}

/// Result of running a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the status line. Empty when there is nothing to report.
    pub status: String,
    /// The session should terminate, discarding anything unsaved.
    pub quit: bool,
}

impl Outcome {
    fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            quit: false,
        }
    }
}

/// Runs command lines against a [`VarStore`].
#[derive(Debug, Clone)]
pub struct Interpreter {
    default_path: PathBuf,
    home: Option<PathBuf>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_PATH)
    }
}

impl Interpreter {
    /// Creates an interpreter writing to `default_path` when `:w` has no
    /// argument. `~/` is expanded against the user's home directory.
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            home: dirs::home_dir(),
        }
    }

    /// Overrides the home directory used for `~/` expansion.
    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    #[must_use]
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Parses and runs one command line.
    pub fn execute(&self, line: &str, store: &VarStore) -> Outcome {
        Command::parse(line).map_or_else(Outcome::default, |cmd| self.run(&cmd, store))
    }

    /// Runs an already parsed command.
    pub fn run(&self, command: &Command, store: &VarStore) -> Outcome {
        let mut outcome = match command {
            Command::Quit => Outcome::default(),
            Command::Write(arg) | Command::WriteQuit(arg) => self.write(arg.as_deref(), store),
            Command::Exit(arg) => {
                if store.dirty() {
                    self.write(arg.as_deref(), store)
                } else {
                    Outcome::default()
                }
            }
            Command::Import(None) => Outcome::status("Usage: :import <path>"),
            Command::Import(Some(arg)) => self.import(arg, store),
            Command::Reload => {
                store.load_from_env();
                Outcome::status("Reloaded from process environment")
            }
            Command::Help => Outcome::status(HELP_TEXT),
            Command::Unknown(verb) => Outcome::status(format!("Unknown command: {verb}")),
        };
        outcome.quit = command.quits();
        outcome
    }

    fn write(&self, arg: Option<&str>, store: &VarStore) -> Outcome {
        let path = arg.map_or_else(
            || expand_home(&self.default_path, self.home.as_deref()),
            |p| expand_home(Path::new(p), self.home.as_deref()),
        );
        match store.export(&path) {
            Ok(written) => Outcome::status(format!("Wrote {}", written.display())),
            Err(e) => {
                warn!(error = %e, "Write command failed");
                Outcome::status(format!("Write failed: {e}"))
            }
        }
    }

    fn import(&self, arg: &str, store: &VarStore) -> Outcome {
        let path = expand_home(Path::new(arg), self.home.as_deref());
        match store.import(&path) {
            Ok(count) => {
                info!(count, path = %path.display(), "Import command applied");
                Outcome::status(format!("Imported {count} vars from {}", path.display()))
            }
            Err(e) => {
                warn!(error = %e, "Import command failed");
                Outcome::status(format!("Import failed: {e}"))
            }
        }
    }
}
