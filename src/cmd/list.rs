// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::cli::vars::ListArgs;
use crate::core::dotenv::write_entries;
use crate::core::store::VarStore;
use crate::error::EnvoyResult;

/// Writes the (optionally filtered) variables of `store` as dotenv lines or
/// as a JSON object.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_list<W: Write>(store: &VarStore, args: &ListArgs, out: &mut W) -> io::Result<()> {
    if let Some(query) = args.filter.as_deref() {
        store.filter(query);
    }
    let vars = store.visible();
    let entries = vars.iter().map(|v| (v.key.as_str(), v.value.as_str()));
    if args.json {
        let object: BTreeMap<&str, &str> = entries.collect();
        serde_json::to_writer_pretty(&mut *out, &object)?;
        writeln!(out)
    } else {
        write_entries(out, entries)
    }
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_list_command(args: &ListArgs) -> EnvoyResult<()> {
    let mut out = io::stdout().lock();
    write_list(&VarStore::from_process(), args, &mut out)?;
    out.flush()?;
    Ok(())
}
