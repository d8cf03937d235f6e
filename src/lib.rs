// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        edit / export / list / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  envoy.toml, ENVOY_* vars |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                  ui (ratatui, crossterm)
//!             Session --> ModalState + Controller
//!                            |
//!   +------------------------+-----------------------+
//!   |  core   modal, command, store, dotenv, env     |
//!   +------------------------------------------------+
//!   |  foundation   error, logging, utility          |
//!   +------------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ui;
pub mod utility;
