// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered, filterable variable store with environment write-through.
//!
//! # Architecture
//!
//! ```text
//! VarStore
//!   RwLock<StoreData>
//!     items     BTreeMap<key, Variable>  full set, sorted, unique
//!     filtered  Vec<key>                 view matching `query`
//!     query / dirty
//!   Box<dyn EnvPort>                      upsert -> set, delete -> unset
//!
//! reads:  list_keys, count, get_by_index, get, position, query, dirty
//! writes: load_from_env, upsert, delete, filter
//! files:  export (read lock held throughout)
//!         import (one upsert per line, each locked separately)
//! ```
//!
//! An import is not atomic: readers on other threads may observe the store
//! part way through a file.

pub mod types;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::core::dotenv;
use crate::core::env::{EnvPort, ProcessEnv};
use crate::error::{StoreError, StoreResult};

use types::StoreData;
pub use types::Variable;

/// Path used by [`VarStore::export`] when given an empty path.
pub const DEFAULT_EXPORT_PATH: &str = ".env";

/// The authoritative set of variables for a session.
pub struct VarStore {
    data: RwLock<StoreData>,
    env: Box<dyn EnvPort>,
}

impl std::fmt::Debug for VarStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VarStore")
            .field("data", &*self.read())
            .finish_non_exhaustive()
    }
}

impl VarStore {
    /// Creates a store snapshotting `env`.
    pub fn new(env: impl EnvPort + 'static) -> Self {
        let data = StoreData::from_snapshot(env.snapshot());
        Self {
            data: RwLock::new(data),
            env: Box::new(env),
        }
    }

    /// Creates a store over the live process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::new(ProcessEnv)
    }

    /// Discards every in-memory change and re-snapshots the environment.
    ///
    /// Clears the filter and the dirty flag.
    pub fn load_from_env(&self) {
        let fresh = StoreData::from_snapshot(self.env.snapshot());
        let count = fresh.items.len();
        *self.write() = fresh;
        info!(count, "Loaded variables from environment");
    }

    /// Keys of the current filtered view.
    #[must_use]
    pub fn list_keys(&self) -> Vec<String> {
        self.read().filtered.clone()
    }

    /// Variables of the current filtered view, in order.
    #[must_use]
    pub fn visible(&self) -> Vec<Variable> {
        let data = self.read();
        data.filtered
            .iter()
            .filter_map(|key| data.items.get(key).cloned())
            .collect()
    }

    /// Number of entries in the current filtered view.
    #[must_use]
    pub fn count(&self) -> usize {
        self.read().filtered.len()
    }

    /// Number of entries in the full set, ignoring the filter.
    #[must_use]
    pub fn len_total(&self) -> usize {
        self.read().items.len()
    }

    /// Returns the variable at `index` of the filtered view.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<Variable> {
        let data = self.read();
        let key = data.filtered.get(index)?;
        data.items.get(key).cloned()
    }

    /// Looks up a variable by name, ignoring the filter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Variable> {
        self.read().items.get(key).cloned()
    }

    /// Index of `key` within the filtered view.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.read().filtered.iter().position(|k| k == key)
    }

    /// The last applied filter string.
    #[must_use]
    pub fn query(&self) -> String {
        self.read().query.clone()
    }

    /// Whether anything was mutated since the last load.
    #[must_use]
    pub fn dirty(&self) -> bool {
        self.read().dirty
    }

    /// Inserts or overwrites `key`, then writes it through to the environment.
    ///
    /// The current filter is re-applied, so a new key that does not match it
    /// stays out of the view.
    pub fn upsert(&self, key: &str, value: &str) {
        let mut data = self.write();
        let existed = data
            .items
            .insert(key.to_string(), Variable::edited(key, value))
            .is_some();
        let query = std::mem::take(&mut data.query);
        data.apply_filter(&query);
        data.dirty = true;
        debug!(key, existed, "Upserted variable");
        if let Err(e) = self.env.set(key, value) {
            warn!(key, error = %e, "Skipped environment write-through");
        }
    }

    /// Removes `key` from the store and the environment.
    ///
    /// Removing an absent key still marks the store dirty and still unsets the
    /// name in the environment.
    pub fn delete(&self, key: &str) {
        let mut data = self.write();
        let existed = data.items.remove(key).is_some();
        if let Some(pos) = data.filtered.iter().position(|k| k == key) {
            data.filtered.remove(pos);
        }
        data.dirty = true;
        debug!(key, existed, "Deleted variable");
        if let Err(e) = self.env.unset(key) {
            warn!(key, error = %e, "Skipped environment unset");
        }
    }

    /// Replaces the filter and recomputes the view from the full set.
    pub fn filter(&self, query: &str) {
        self.write().apply_filter(query);
    }

    /// Writes the full set (not the filtered view) to `path` in dotenv format.
    ///
    /// An empty path means [`DEFAULT_EXPORT_PATH`]. Parent directories are
    /// created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Export`] if a directory or the file cannot be
    /// created, or if any write fails.
    pub fn export(&self, path: impl AsRef<Path>) -> StoreResult<PathBuf> {
        let path = match path.as_ref() {
            p if p.as_os_str().is_empty() => PathBuf::from(DEFAULT_EXPORT_PATH),
            p => p.to_path_buf(),
        };
        let data = self.read();
        let to_err = |source| StoreError::Export {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(to_err)?;
        }
        let file = File::create(&path).map_err(to_err)?;
        let mut writer = BufWriter::new(file);
        dotenv::write_entries(
            &mut writer,
            data.items
                .values()
                .map(|v| (v.key.as_str(), v.value.as_str())),
        )
        .map_err(to_err)?;
        writer.flush().map_err(to_err)?;

        info!(path = %path.display(), count = data.items.len(), "Exported variables");
        Ok(path)
    }

    /// Merges a dotenv file into the store, one [`upsert`](Self::upsert) per
    /// well-formed line, and returns the number of lines applied.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingPath`] if `path` is empty
    /// - [`StoreError::Import`] if the file cannot be opened
    /// - [`StoreError::Read`] if reading fails part way; entries before the
    ///   failure stay applied
    pub fn import(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(StoreError::MissingPath);
        }
        let file = File::open(path).map_err(|source| StoreError::Import {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut applied = 0;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(source) => {
                    return Err(StoreError::Read {
                        path: path.to_path_buf(),
                        applied,
                        source,
                    });
                }
            }
            if let Some((key, value)) = dotenv::parse_line(&String::from_utf8_lossy(&buf)) {
                self.upsert(&key, &value);
                applied += 1;
            }
        }

        info!(path = %path.display(), applied, "Imported variables");
        Ok(applied)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
