// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv text format.
//!
//! ```text
//! export:  KEY=value            plain
//!          KEY=""               empty value
//!          KEY="a b \"c\""      value has space # \t \r \n " ' $
//!
//! import:  blank / #comment     skipped
//!          export KEY=VALUE     prefix stripped
//!          KEY = "quoted"       split at first '=', both sides trimmed,
//!                               one layer of "" removed, \" -> "
//!          no '=' / empty key   dropped
//! ```
//!
//! Values with embedded newlines or backslashes do not round-trip: only `\"`
//! is ever escaped or unescaped. Keys are trimmed on output but otherwise
//! written as-is, so a key containing `=` produces a line that reads back
//! differently.

use std::borrow::Cow;
use std::io::{self, Write};

#[cfg(test)]
mod tests;

/// Characters that force a value into double quotes.
const QUOTE_TRIGGERS: [char; 8] = [' ', '#', '\t', '\r', '\n', '"', '\'', '$'];

/// Quotes `value` for output when it is empty or contains special characters.
#[must_use]
pub fn quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed(r#""""#);
    }
    if !value.contains(QUOTE_TRIGGERS) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(format!("\"{}\"", value.replace('"', r#"\""#)))
}

/// Strips one layer of surrounding double quotes and unescapes `\"`.
///
/// Anything not wrapped in a matching pair of double quotes is returned
/// trimmed but otherwise untouched.
#[must_use]
pub fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    match raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace(r#"\""#, "\""),
        None => raw.to_string(),
    }
}

/// Formats one `KEY=VALUE` line without the trailing newline.
#[must_use]
pub fn format_line(key: &str, value: &str) -> String {
    format!("{}={}", key.trim(), quote(value))
}

/// Parses one line, returning `None` for blank lines, comments, and
/// malformed entries.
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").map_or(line, str::trim);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value)))
}

/// Writes each pair as a dotenv line terminated by `\n`.
///
/// # Errors
///
/// Returns the first I/O error raised by `writer`.
pub fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (key, value) in entries {
        writeln!(writer, "{}", format_line(key, value))?;
    }
    Ok(())
}

/// Tally of a parse pass over a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Well-formed entries in input order.
    pub entries: Vec<(String, String)>,
    /// Non-blank, non-comment lines that were dropped.
    pub skipped: usize,
}

/// Parses a whole document without applying it anywhere.
#[must_use]
pub fn parse_document(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Some(entry) => report.entries.push(entry),
            None => report.skipped += 1,
        }
    }
    report
}
