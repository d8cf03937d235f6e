// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   edit, export, list, check, options
//! ```

pub mod check;
pub mod config;
pub mod edit;
pub mod export;
pub mod list;

#[cfg(test)]
mod tests;
