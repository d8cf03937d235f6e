// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment ports.
//!
//! # Architecture
//!
//! ```text
//! EnvPort (snapshot / set / unset)
//!   ProcessEnv   live process environment (single writer: VarStore)
//!   MemoryEnv    Mutex<BTreeMap<String, String>> for tests and dry runs
//! ```
//!
//! - **Explicit side effect**: the store never calls `std::env` directly
//! - **No panics**: names and values the platform cannot hold are refused
//!   with [`EnvError`] instead of aborting inside `std::env::set_var`
//! - **Lossy capture**: non-UTF-8 entries are converted with replacement chars

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{EnvError, EnvResult};


/// Side-effecting port the variable store writes through to.
///
/// Implementations must be callable from any thread; the store serialises
/// its own calls under its write lock.
pub trait EnvPort: Send + Sync {
    /// Returns every `(name, value)` pair currently visible.
    fn snapshot(&self) -> Vec<(String, String)>;

    /// Sets `key` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError`] if the name or value cannot be represented.
    fn set(&self, key: &str, value: &str) -> EnvResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidKey`] if the name cannot be represented.
    fn unset(&self, key: &str) -> EnvResult<()>;
}

impl<T: EnvPort + ?Sized> EnvPort for Arc<T> {
    fn snapshot(&self) -> Vec<(String, String)> {
        (**self).snapshot()
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        (**self).set(key, value)
    }

    fn unset(&self, key: &str) -> EnvResult<()> {
        (**self).unset(key)
    }
}

/// The live process environment.
///
/// # Single writer
///
/// The process environment is global state. While a session runs, the
/// [`VarStore`](crate::core::store::VarStore) owning this port is assumed to be
/// its only writer. Nothing here guards against other threads or libraries
/// mutating the same names concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvPort for ProcessEnv {
    fn snapshot(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        check_key(key)?;
        if value.contains('\0') {
            return Err(EnvError::InvalidValue {
                key: key.to_string(),
            });
        }
        // SAFETY: VarStore is the single writer of the process environment
        // and serialises every call under its write lock (see type docs).
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn unset(&self, key: &str) -> EnvResult<()> {
        check_key(key)?;
        // SAFETY: Same single-writer contract as `set`.
        unsafe {
            std::env::remove_var(key);
        }
        Ok(())
    }
}

/// An in-memory environment.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<BTreeMap<String, String>>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment seeded with `vars`.
    pub fn with_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Mutex::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EnvPort for MemoryEnv {
    fn snapshot(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        check_key(key)?;
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn unset(&self, key: &str) -> EnvResult<()> {
        check_key(key)?;
        self.lock().remove(key);
        Ok(())
    }
}

/// Rejects names `std::env::set_var` would panic on.
fn check_key(key: &str) -> EnvResult<()> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return Err(EnvError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}
