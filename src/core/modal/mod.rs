// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vim-style input mode state machine.
//!
//! # Normal-mode grammar
//!
//! ```text
//! [count] [operator] key
//!   count     [1-9][0-9]*     a lone leading 0 is the "first column" key
//!   operator  g               waits for a second key (gg)
//!
//! h l     column left / right       j k    row down / up by count
//! gg G    first / last row          0 $    first / last column
//! /       Search mode               :      Command mode
//! n N     next / previous match     x      delete (confirmed elsewhere)
//! i a     edit (Insert mode)        A      add (Insert mode)
//! ESC     cancel
//! ```
//!
//! The count and operator are cleared after every key that is not itself a
//! prefix, whether or not it was recognised.
//!
//! # Ownership
//!
//! ```text
//! key token --> ModalState::handle_key --> transition fn (pure, per mode)
//!                    |                          |
//!                    |                     (Prefix, Step)
//!                    v
//!              Controls (implemented by the UI controller)
//! ```
//!
//! Insert, Command and Search are driven by the controller's forms and
//! minibuffer. This machine only records that they are active; the
//! controller reports completion through [`ModalState::finish`].

#[cfg(test)]
mod tests;

use std::fmt;

/// Active input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Command,
    Search,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "INSERT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

/// Cursor movement requested from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Down(usize),
    Up(usize),
    FirstColumn,
    LastColumn,
    FirstRow,
    LastRow,
}

/// A fully decoded Normal-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Motion),
    BeginSearch,
    BeginCommand,
    NextMatch,
    PrevMatch,
    Edit { append: bool },
    Add,
    Delete,
    Cancel,
}

/// Capabilities the controller lends to the state machine.
pub trait Controls {
    /// Moves the selection. Implementations clamp to the visible table.
    fn motion(&mut self, motion: Motion);

    /// Cycles through the filtered rows, wrapping at either end.
    fn next_match(&mut self, backwards: bool);

    /// Opens the search prompt.
    fn begin_search(&mut self);

    /// Opens the command prompt.
    fn begin_command(&mut self);

    /// Opens the edit form for the selected row. Returns `false` if there is
    /// nothing to edit.
    fn edit(&mut self, append: bool) -> bool;

    /// Opens the form for a new row. Returns `false` if it could not open.
    fn add(&mut self) -> bool;

    /// Asks to delete the selected row.
    fn delete(&mut self);

    /// Abandons whatever modal flow is pending.
    fn cancel(&mut self);

    /// Shows an incomplete prefix such as `-- 3` or `-- g`.
    fn pending(&mut self, _prefix: &str) {}
}

/// Buffered count and operator awaiting a terminating key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    count: String,
    operator: Option<char>,
}

impl Prefix {
    /// Repeat count, defaulting to 1. Saturates instead of overflowing.
    #[must_use]
    pub fn count(&self) -> usize {
        if self.count.is_empty() {
            return 1;
        }
        self.count.parse().unwrap_or(usize::MAX)
    }

    #[must_use]
    pub const fn operator(&self) -> Option<char> {
        self.operator
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count.is_empty() && self.operator.is_none()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.count)?;
        if let Some(op) = self.operator {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// What a single key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Key extended the prefix.
    Pending,
    /// Key completed a command.
    Dispatch(Action),
    /// Key completed a sequence that means nothing (`g` then `j`).
    Ignored,
    /// Key is not part of the grammar, or the mode does not take keys.
    Unhandled,
}

/// Normal-mode transition.
#[must_use]
pub fn normal(prefix: &Prefix, key: &str) -> (Prefix, Step) {
    if let Some(digit) = single_digit(key)
        && !(prefix.count.is_empty() && digit == '0')
    {
        let mut next = prefix.clone();
        next.count.push(digit);
        return (next, Step::Pending);
    }

    if prefix.operator == Some('g') {
        let step = if key == "g" {
            Step::Dispatch(Action::Move(Motion::FirstRow))
        } else {
            Step::Ignored
        };
        return (Prefix::default(), step);
    }

    let count = prefix.count();
    let action = match key {
        "h" => Action::Move(Motion::Left),
        "l" => Action::Move(Motion::Right),
        "j" => Action::Move(Motion::Down(count)),
        "k" => Action::Move(Motion::Up(count)),
        "g" => {
            let next = Prefix {
                count: prefix.count.clone(),
                operator: Some('g'),
            };
            return (next, Step::Pending);
        }
        "G" => Action::Move(Motion::LastRow),
        "0" => Action::Move(Motion::FirstColumn),
        "$" => Action::Move(Motion::LastColumn),
        "/" => Action::BeginSearch,
        "n" => Action::NextMatch,
        "N" => Action::PrevMatch,
        ":" => Action::BeginCommand,
        "i" => Action::Edit { append: false },
        "a" => Action::Edit { append: true },
        "A" => Action::Add,
        "x" => Action::Delete,
        "ESC" => Action::Cancel,
        _ => return (Prefix::default(), Step::Unhandled),
    };
    (Prefix::default(), Step::Dispatch(action))
}

/// Transition for modes whose keys belong to a form or minibuffer.
#[must_use]
pub fn passive(prefix: &Prefix, _key: &str) -> (Prefix, Step) {
    (prefix.clone(), Step::Unhandled)
}

fn single_digit(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

/// Session-owned input state.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    mode: Mode,
    prefix: Prefix,
    last_search: String,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    #[must_use]
    pub fn last_search(&self) -> &str {
        &self.last_search
    }

    /// Records the query of a completed search.
    pub fn set_last_search(&mut self, query: impl Into<String>) {
        self.last_search = query.into();
    }

    /// Drops a pending count or operator for a key the caller consumed itself.
    pub fn reset_prefix(&mut self) {
        self.prefix = Prefix::default();
    }

    /// Returns to Normal after a form or minibuffer closes.
    pub fn finish(&mut self) {
        self.mode = Mode::Normal;
        self.prefix = Prefix::default();
    }

    /// Feeds one normalised key token. Returns `true` if the key was consumed.
    pub fn handle_key<C: Controls + ?Sized>(&mut self, key: &str, controls: &mut C) -> bool {
        let transition = match self.mode {
            Mode::Normal => normal,
            Mode::Insert | Mode::Command | Mode::Search => passive,
        };
        let (prefix, step) = transition(&self.prefix, key);
        self.prefix = prefix;

        match step {
            Step::Pending => {
                controls.pending(&format!("-- {}", self.prefix));
                true
            }
            Step::Dispatch(action) => {
                self.apply(action, controls);
                true
            }
            Step::Ignored => true,
            Step::Unhandled => false,
        }
    }

    fn apply<C: Controls + ?Sized>(&mut self, action: Action, controls: &mut C) {
        match action {
            Action::Move(motion) => controls.motion(motion),
            Action::BeginSearch => {
                self.mode = Mode::Search;
                controls.begin_search();
            }
            Action::BeginCommand => {
                self.mode = Mode::Command;
                controls.begin_command();
            }
            Action::NextMatch => controls.next_match(false),
            Action::PrevMatch => controls.next_match(true),
            Action::Edit { append } => {
                if controls.edit(append) {
                    self.mode = Mode::Insert;
                }
            }
            Action::Add => {
                if controls.add() {
                    self.mode = Mode::Insert;
                }
            }
            Action::Delete => controls.delete(),
            Action::Cancel => controls.cancel(),
        }
    }
}
