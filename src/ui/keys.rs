// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal key events to Normal-mode tokens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key event to the token the modal state machine understands.
///
/// Arrows become `h`/`j`/`k`/`l`, Esc and Enter become `ESC` and `ENTER`.
/// Control chords and keys without a printable form yield `None`.
#[must_use]
pub fn normalize(event: &KeyEvent) -> Option<String> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let token = match event.code {
        KeyCode::Esc => "ESC".to_string(),
        KeyCode::Enter => "ENTER".to_string(),
        KeyCode::Up => "k".to_string(),
        KeyCode::Down => "j".to_string(),
        KeyCode::Left => "h".to_string(),
        KeyCode::Right => "l".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    Some(token)
}

/// Ctrl-C always ends the session.
#[must_use]
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c')
}
