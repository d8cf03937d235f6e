// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envoy.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envoy.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVOY_* env vars
//! 5. --log-level / --file-log-level / --log-file (logging only)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVOY_GLOBAL__LOG_FILE=/tmp/e.log       → global.log_file
//! ENVOY_SESSION__CONFIRM_DELETE=false     → session.confirm_delete
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};

use loader::ConfigLoader;
use types::{GlobalConfig, SessionConfig};

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE_NAME: &str = "envoy.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Interactive session options.
    pub session: SessionConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envoy::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envoy.toml")
    ///     .with_env_prefix("ENVOY")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Format configuration options for display, one `section.key = value`
    /// per line in a stable order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let log_file = self
            .global
            .log_file
            .as_ref()
            .map_or_else(String::new, |p| p.display().to_string());
        vec![
            format!(
                "global.output_log_level = {}",
                self.global.output_log_level.as_u8()
            ),
            format!(
                "global.file_log_level = {}",
                self.global.file_log_level.as_u8()
            ),
            format!("global.log_file = {log_file}"),
            format!(
                "session.default_export = {}",
                self.session.default_export.display()
            ),
            format!("session.confirm_delete = {}", self.session.confirm_delete),
        ]
    }
}
