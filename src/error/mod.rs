// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvoyError (~24 bytes)
//!               |
//!   +-------+---+----+------+
//!   |       |        |      |
//!   v       v        v      v
//! Store   Config     Io   Other
//!  Box     Box      Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Store   MissingPath, Export, Import, Read
//!   Config  InvalidValue, NotFound, Parse
//!
//! EnvError (InvalidKey, InvalidValue) stays on the environment port: the
//! store logs it and carries on, so it never reaches EnvoyError.
//! ```
//!
//! None of these terminate an interactive session: the command interpreter
//! and the controller render them into status text.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvoyError`].
pub type EnvoyResult<T> = std::result::Result<T, EnvoyError>;

/// Result type for variable store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for environment write-through.
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvoyError {
    /// Variable store operation failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a generic [`EnvoyError::Other`].
pub fn other(message: impl Into<String>) -> EnvoyError {
    EnvoyError::Other(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvoyError {
                fn from(err: $error) -> Self {
                    EnvoyError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Store Errors ---

/// Variable store errors.
///
/// Malformed dotenv lines are not errors: they are skipped and simply not
/// counted by an import.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Import was requested without a path.
    #[error("import path required")]
    MissingPath,

    /// Export destination could not be created or written.
    #[error("cannot write '{}': {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Import source could not be opened.
    #[error("cannot open '{}': {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Import source failed part way through.
    #[error("failed reading '{}' after {applied} entries: {source}", .path.display())]
    Read {
        path: PathBuf,
        applied: usize,
        #[source]
        source: std::io::Error,
    },
}

// --- Environment Errors ---

/// Errors reported by an environment port.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// Name is empty or contains `=` or NUL.
    #[error("invalid variable name '{key}'")]
    InvalidKey { key: String },

    /// Value contains NUL.
    #[error("invalid value for '{key}'")]
    InvalidValue { key: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A file named with `--config` does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A source could not be read, parsed or deserialized.
    #[error("invalid configuration: {0}")]
    Parse(config::ConfigError),
}
