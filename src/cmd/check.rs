// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation.

use std::fs;
use std::io::{self, Write};

use tracing::info;

use crate::cli::vars::CheckArgs;
use crate::core::dotenv::{ParseReport, format_line, parse_document};
use crate::error::{EnvoyResult, StoreError, other};

/// Writes one line per entry followed by a summary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(report: &ParseReport, values: bool, out: &mut W) -> io::Result<()> {
    for (key, value) in &report.entries {
        if values {
            writeln!(out, "{}", format_line(key, value))?;
        } else {
            writeln!(out, "{key}")?;
        }
    }
    writeln!(
        out,
        "{} entries, {} skipped",
        report.entries.len(),
        report.skipped
    )
}

/// Main handler for check command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it contains lines that
/// an import would skip.
pub fn run_check_command(args: &CheckArgs) -> EnvoyResult<()> {
    let bytes = fs::read(&args.path).map_err(|source| StoreError::Import {
        path: args.path.clone(),
        source,
    })?;
    let report = parse_document(&String::from_utf8_lossy(&bytes));
    info!(
        path = %args.path.display(),
        entries = report.entries.len(),
        skipped = report.skipped,
        "Checked dotenv file"
    );

    let mut out = io::stdout().lock();
    write_report(&report, args.values, &mut out)?;
    out.flush()?;

    if report.skipped > 0 {
        return Err(other(format!(
            "{} malformed line(s) in '{}'",
            report.skipped,
            args.path.display()
        )));
    }
    Ok(())
}
