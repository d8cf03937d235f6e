// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive terminal editor.
//!
//! # Event Loop
//!
//! ```text
//! TerminalGuard::enter
//!     |
//!     v
//! draw(Session) <-------------------+
//!     |                             |
//!     v                             |
//! crossterm::event::read            |
//!     |  key press                  |
//!     v                             |
//! Session::handle_event ---- !quit -+
//!     |
//!     v quit
//! TerminalGuard dropped (screen restored)
//! ```

pub mod controller;
pub mod input;
pub mod keys;
pub mod render;
pub mod terminal;


use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::error::Result;
use controller::Session;
use terminal::TerminalGuard;

/// Runs `session` until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or read from.
pub fn run(mut session: Session) -> Result<()> {
    let mut terminal = TerminalGuard::enter()?;
    info!(
        count = session.controller().store().len_total(),
        "Editor session started"
    );

    while !session.should_quit() {
        terminal.draw(|frame| render::draw(frame, &session))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            session.handle_event(&key);
        }
    }

    info!(dirty = session.controller().store().dirty(), "Editor session ended");
    Ok(())
}
