// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive editor command.

use crate::config::Config;
use crate::core::command::Interpreter;
use crate::core::store::VarStore;
use crate::error::Result;
use crate::ui::{self, controller::Session};

/// Opens the editor over the live process environment.
///
/// # Errors
///
/// Returns an error if the terminal cannot be used.
pub fn run_edit_command(config: &Config) -> Result<()> {
    let store = VarStore::from_process();
    let interpreter = Interpreter::new(&config.session.default_export);
    let session =
        Session::new(store, interpreter).with_confirm_delete(config.session.confirm_delete);
    ui::run(session)
}
