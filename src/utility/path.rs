// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path helpers.

use std::path::{Path, PathBuf};

/// Expands a leading `~/` against `home`.
///
/// Only the `~/` form is recognised; `~user/` and a bare `~` are returned
/// unchanged, as is everything when `home` is `None`.
#[must_use]
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.to_str().and_then(|p| p.strip_prefix("~/")), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
