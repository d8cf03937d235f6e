// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envoy.
//!
//! # Config Structure
//!
//! ```text
//! [global]   output_log_level, file_log_level, log_file
//! [session]  default_export, confirm_delete
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::store::DEFAULT_EXPORT_PATH;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6). Ignored by the interactive editor.
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Interactive session options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Destination of `:w`, `:wq`, `:x` and `export` without a path.
    pub default_export: PathBuf,
    /// Ask before `x` deletes a variable.
    pub confirm_delete: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_export: PathBuf::from(DEFAULT_EXPORT_PATH),
            confirm_delete: true,
        }
    }
}
