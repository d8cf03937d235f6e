// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session state behind the terminal UI.
//!
//! ```text
//! KeyEvent --> Session::handle_event
//!                |  pending delete?  y / anything else
//!                |  Normal   --> keys::normalize --> ModalState --> Controls
//!                |  Insert   --> Form
//!                |  Command  --> Prompt --> Interpreter
//!                '  Search   --> Prompt --> VarStore::filter (every change)
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::core::command::Interpreter;
use crate::core::modal::{Controls, Mode, ModalState, Motion};
use crate::core::store::{VarStore, Variable};
use crate::ui::input::LineInput;
use crate::ui::keys;

const HINTS: &str = "[A]dd [i/a] Edit [x] Delete [/] Search [:] Cmd (n/N to cycle) | :w :q :import";

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
}

/// Modal add/edit form.
#[derive(Debug, Clone)]
pub struct Form {
    adding: bool,
    key: LineInput,
    value: LineInput,
    focus: Field,
}

impl Form {
    fn edit(var: &Variable, focus: Field) -> Self {
        Self {
            adding: false,
            key: LineInput::with_text(var.key.as_str()),
            value: LineInput::with_text(var.value.as_str()),
            focus,
        }
    }

    fn add() -> Self {
        Self {
            adding: true,
            key: LineInput::default(),
            value: LineInput::default(),
            focus: Field::Key,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.adding {
            " Add variable "
        } else {
            " Edit variable "
        }
    }

    #[must_use]
    pub const fn key(&self) -> &LineInput {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &LineInput {
        &self.value
    }

    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Key => Field::Value,
            Field::Value => Field::Key,
        };
    }

    fn focused_mut(&mut self) -> &mut LineInput {
        match self.focus {
            Field::Key => &mut self.key,
            Field::Value => &mut self.value,
        }
    }
}

/// Kind of minibuffer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Command,
    Search,
}

/// The bottom-line minibuffer.
#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: LineInput,
}

impl Prompt {
    #[must_use]
    pub const fn label(&self) -> char {
        match self.kind {
            PromptKind::Command => ':',
            PromptKind::Search => '/',
        }
    }

    #[must_use]
    pub const fn input(&self) -> &LineInput {
        &self.input
    }
}

/// Owns the store and the view state; lends [`Controls`] to the modal
/// state machine.
#[derive(Debug)]
pub struct Controller {
    store: VarStore,
    interpreter: Interpreter,
    confirm_delete: bool,
    row: usize,
    col: usize,
    form: Option<Form>,
    prompt: Option<Prompt>,
    pending_delete: Option<String>,
    status: Option<String>,
    quit: bool,
}

impl Controller {
    fn new(store: VarStore, interpreter: Interpreter) -> Self {
        Self {
            store,
            interpreter,
            confirm_delete: true,
            row: 0,
            col: 0,
            form: None,
            prompt: None,
            pending_delete: None,
            status: None,
            quit: false,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    fn clamp_row(&mut self) {
        self.row = self.row.min(self.store.count().saturating_sub(1));
    }

    fn select_key(&mut self, key: &str) {
        if let Some(row) = self.store.position(key) {
            self.row = row;
        }
    }

    fn remove(&mut self, key: &str) {
        self.store.delete(key);
        self.clamp_row();
        self.set_status(format!("Deleted {key}"));
    }

    fn apply_search(&mut self, query: &str) {
        self.store.filter(query);
        self.row = 0;
        if query.is_empty() {
            self.set_status("Filter cleared");
        } else {
            self.set_status(format!("Filter: {query}"));
        }
    }

    /// Handles a key while the form is open. Returns `true` once it closed.
    fn form_key(&mut self, key: &KeyEvent) -> bool {
        let Some(form) = self.form.as_mut() else {
            return true;
        };
        match key.code {
            KeyCode::Esc => {
                self.form = None;
                true
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.toggle_focus();
                false
            }
            KeyCode::Enter => self.submit_form(),
            _ => {
                form.focused_mut().handle(key);
                false
            }
        }
    }

    fn submit_form(&mut self) -> bool {
        let Some(form) = self.form.as_ref() else {
            return true;
        };
        let key = form.key.text().trim().to_string();
        if key.is_empty() {
            self.set_status("Key cannot be empty");
            return false;
        }
        let value = form.value.text().to_string();
        let verb = if form.adding { "Added" } else { "Saved" };

        self.store.upsert(&key, &value);
        self.form = None;
        self.select_key(&key);
        self.set_status(format!("{verb} {key}"));
        true
    }

    /// Handles a key while the minibuffer is open. Returns the prompt kind
    /// once it closed.
    fn prompt_key(&mut self, key: &KeyEvent) -> Option<PromptKind> {
        let prompt = self.prompt.as_mut()?;
        let kind = prompt.kind;
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                Some(kind)
            }
            KeyCode::Enter => {
                let text = prompt.input.text().to_string();
                self.prompt = None;
                match kind {
                    PromptKind::Command => self.run_command(&text),
                    PromptKind::Search => self.apply_search(&text),
                }
                Some(kind)
            }
            _ => {
                if prompt.input.handle(key) && kind == PromptKind::Search {
                    let text = prompt.input.text().to_string();
                    self.apply_search(&text);
                }
                None
            }
        }
    }

    fn run_command(&mut self, line: &str) {
        let outcome = self.interpreter.execute(line, &self.store);
        debug!(line, quit = outcome.quit, "Executed command");
        if !outcome.status.is_empty() {
            self.status = Some(outcome.status);
        }
        self.quit |= outcome.quit;
        self.clamp_row();
    }

    #[must_use]
    pub const fn store(&self) -> &VarStore {
        &self.store
    }

    /// Selected `(row, column)` of the filtered table.
    #[must_use]
    pub const fn selection(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub const fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    #[must_use]
    pub const fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }
}

impl Controls for Controller {
    fn motion(&mut self, motion: Motion) {
        let last = self.store.count().saturating_sub(1);
        match motion {
            Motion::Left | Motion::FirstColumn => self.col = 0,
            Motion::Right | Motion::LastColumn => self.col = 1,
            Motion::Down(n) => self.row = self.row.saturating_add(n).min(last),
            Motion::Up(n) => self.row = self.row.saturating_sub(n),
            Motion::FirstRow => self.row = 0,
            Motion::LastRow => self.row = last,
        }
    }

    fn next_match(&mut self, backwards: bool) {
        let count = self.store.count();
        if self.store.query().is_empty() || count < 2 {
            return;
        }
        self.row = if backwards {
            self.row.checked_sub(1).unwrap_or(count - 1)
        } else if self.row + 1 >= count {
            0
        } else {
            self.row + 1
        };
    }

    fn begin_search(&mut self) {
        self.prompt = Some(Prompt {
            kind: PromptKind::Search,
            input: LineInput::default(),
        });
    }

    fn begin_command(&mut self) {
        self.prompt = Some(Prompt {
            kind: PromptKind::Command,
            input: LineInput::default(),
        });
    }

    fn edit(&mut self, append: bool) -> bool {
        let Some(var) = self.store.get_by_index(self.row) else {
            return false;
        };
        let focus = if append { Field::Value } else { Field::Key };
        self.form = Some(Form::edit(&var, focus));
        true
    }

    fn add(&mut self) -> bool {
        self.form = Some(Form::add());
        true
    }

    fn delete(&mut self) {
        let Some(var) = self.store.get_by_index(self.row) else {
            return;
        };
        if self.confirm_delete {
            self.pending_delete = Some(var.key);
        } else {
            self.remove(&var.key);
        }
    }

    fn cancel(&mut self) {
        self.form = None;
        self.prompt = None;
        self.pending_delete = None;
    }

    fn pending(&mut self, prefix: &str) {
        self.set_status(prefix);
    }
}

/// One interactive editing session.
#[derive(Debug)]
pub struct Session {
    modal: ModalState,
    controller: Controller,
}

impl Session {
    #[must_use]
    pub fn new(store: VarStore, interpreter: Interpreter) -> Self {
        Self {
            modal: ModalState::new(),
            controller: Controller::new(store, interpreter),
        }
    }

    /// Whether `x` asks before deleting.
    #[must_use]
    pub const fn with_confirm_delete(mut self, confirm: bool) -> Self {
        self.controller.confirm_delete = confirm;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.modal.mode()
    }

    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.controller.quit
    }

    /// Routes one key press.
    pub fn handle_event(&mut self, key: &KeyEvent) {
        if keys::is_interrupt(key) {
            self.controller.quit = true;
            return;
        }
        self.controller.status = None;

        if let Some(victim) = self.controller.pending_delete.take() {
            if matches!(key.code, KeyCode::Char('y' | 'Y')) {
                self.controller.remove(&victim);
            }
            return;
        }

        match self.modal.mode() {
            Mode::Normal => {
                let Some(token) = keys::normalize(key) else {
                    return;
                };
                if token == "q" {
                    self.modal.reset_prefix();
                    self.controller.set_status("Use :q to quit");
                    return;
                }
                self.modal.handle_key(&token, &mut self.controller);
            }
            Mode::Insert => {
                if self.controller.form_key(key) {
                    self.modal.finish();
                }
            }
            Mode::Command | Mode::Search => {
                if let Some(kind) = self.controller.prompt_key(key) {
                    if kind == PromptKind::Search {
                        let query = self.controller.store.query();
                        self.modal.set_last_search(query);
                    }
                    self.modal.finish();
                }
            }
        }
    }

    /// Text of the bottom status line.
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(key) = self.controller.pending_delete() {
            return format!("Delete {key}? (y/n)");
        }
        if let Some(message) = &self.controller.status {
            return message.clone();
        }
        format!(
            "{} | {} vars | {HINTS}",
            self.modal.mode(),
            self.controller.store.count()
        )
    }
}
