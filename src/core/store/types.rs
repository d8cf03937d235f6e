// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the variable store.

use std::collections::BTreeMap;

/// A named string variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    pub value: String,
    /// Set once the variable has been written in this session.
    pub modified: bool,
}

impl Variable {
    pub(super) fn captured(key: String, value: String) -> Self {
        Self {
            key,
            value,
            modified: false,
        }
    }

    pub(super) fn edited(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            modified: true,
        }
    }

    /// Case-insensitive substring match against key or value.
    ///
    /// `needle` must already be lowercase.
    pub(super) fn matches(&self, needle: &str) -> bool {
        self.key.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

/// Lock-protected store state.
///
/// `items` is keyed and ordered by name, so the full order is always sorted
/// and duplicate free. `filtered` holds the names of `items` matching `query`,
/// in the same order.
#[derive(Debug, Default)]
pub(super) struct StoreData {
    pub(super) items: BTreeMap<String, Variable>,
    pub(super) filtered: Vec<String>,
    pub(super) query: String,
    pub(super) dirty: bool,
}

impl StoreData {
    pub(super) fn from_snapshot(vars: Vec<(String, String)>) -> Self {
        let items: BTreeMap<_, _> = vars
            .into_iter()
            .map(|(k, v)| (k.clone(), Variable::captured(k, v)))
            .collect();
        let filtered = items.keys().cloned().collect();
        Self {
            items,
            filtered,
            query: String::new(),
            dirty: false,
        }
    }

    pub(super) fn apply_filter(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        if query.is_empty() {
            self.filtered = self.items.keys().cloned().collect();
            return;
        }
        let needle = query.to_lowercase();
        self.filtered = self
            .items
            .values()
            .filter(|v| v.matches(&needle))
            .map(|v| v.key.clone())
            .collect();
    }
}
