// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core, terminal-independent logic.
//!
//! ```text
//!                 core
//!                  |
//!     +--------+---+----+---------+
//!     |        |        |         |
//!     v        v        v         v
//!   modal   command   store     dotenv
//!     |        |        |
//!  Mode     Command   VarStore --> env
//!  Prefix   Outcome   Variable    EnvPort
//!  Controls                       ProcessEnv / MemoryEnv
//! ```

pub mod command;
pub mod dotenv;
pub mod env;
pub mod modal;
pub mod store;
