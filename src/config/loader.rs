// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from TOML files and the environment.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("envoy.toml")   skipped when absent
//!   .add_toml_file(--config)...             must exist
//!   .with_env_prefix("ENVOY")               ENVOY_SECTION__KEY
//!        |
//!        v
//!    build() --> Config
//!        missing required file  -> ConfigError::NotFound
//!        bad TOML / bad value   -> ConfigError::Parse
//! ```

use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// A TOML file queued for loading.
#[derive(Debug, Clone)]
struct Source {
    path: PathBuf,
    required: bool,
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<Source>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Queues a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(path.as_ref(), true)
    }

    /// Queues a TOML file that is skipped if absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(path.as_ref(), false)
    }

    fn add_source(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.push(Source {
            path: path.to_path_buf(),
            required,
        });
        self
    }

    /// Layers `PREFIX_SECTION__KEY` environment variables over the files.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if a required file does not exist
    /// - [`ConfigError::Parse`] if a file is not valid TOML, an environment
    ///   value cannot be parsed, or the merged result does not fit [`Config`]
    pub fn build(self) -> Result<Config> {
        if let Some(missing) = self
            .sources
            .iter()
            .find(|s| s.required && !s.path.is_file())
        {
            return Err(ConfigError::NotFound(missing.path.clone()).into());
        }

        let builder = match &self.env_prefix {
            // Section and key names contain '_', so sections are split on '__':
            // ENVOY_SESSION__CONFIRM_DELETE -> session.confirm_delete
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Config>())
            .map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Files that contribute to the configuration, in load order.
    ///
    /// Optional files that do not exist are left out.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .filter(|s| s.required || s.path.is_file())
            .map(|s| {
                if s.required {
                    s.path.display().to_string()
                } else {
                    format!("{} (optional)", s.path.display())
                }
            })
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
