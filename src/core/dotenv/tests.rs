// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{format_line, parse_document, parse_line, quote, unquote, write_entries};

#[test]
fn test_quote_table() {
    let cases = [
        ("", r#""""#),
        ("a b", r#""a b""#),
        (r#"has"quote"#, r#""has\"quote""#),
        ("simple", "simple"),
        ("$HOME/bin", r#""$HOME/bin""#),
        ("it's", r#""it's""#),
        ("tab\there", "\"tab\there\""),
        ("#hash", r##""#hash""##),
        (r"C:\path", r"C:\path"),
    ];
    for (input, expected) in cases {
        assert_eq!(quote(input), expected, "quoting {input:?}");
    }
}

#[test]
fn test_unquote() {
    assert_eq!(unquote(r#""a b""#), "a b");
    assert_eq!(unquote(r#""has\"quote""#), r#"has"quote"#);
    assert_eq!(unquote(r#""""#), "");
    assert_eq!(unquote("  plain  "), "plain");
    // Single quotes and lone double quotes are left alone.
    assert_eq!(unquote("'single'"), "'single'");
    assert_eq!(unquote(r#"""#), r#"""#);
    // Only one layer is removed.
    assert_eq!(unquote(r#"""x"""#), r#""x""#);
}

#[test]
fn test_format_line_trims_key() {
    insta::assert_snapshot!(format_line("  KEY ", "a b"), @r#"KEY="a b""#);
    insta::assert_snapshot!(format_line("EMPTY", ""), @r#"EMPTY="""#);
}

#[test]
fn test_parse_line_variants() {
    let parsed: Vec<_> = [
        "FOO=bar",
        "  export   SPACED = \"x y\"  ",
        "URL=http://host/?a=b",
        "# comment",
        "",
        "badline",
        "=novalue",
        " = also bad",
        "EMPTY=",
    ]
    .into_iter()
    .map(parse_line)
    .collect();

    insta::assert_debug_snapshot!(parsed, @r#"
    [
        Some(
            (
                "FOO",
                "bar",
            ),
        ),
        Some(
            (
                "SPACED",
                "x y",
            ),
        ),
        Some(
            (
                "URL",
                "http://host/?a=b",
            ),
        ),
        None,
        None,
        None,
        None,
        None,
        Some(
            (
                "EMPTY",
                "",
            ),
        ),
    ]
    "#);
}

#[test]
fn test_export_prefix_needs_space() {
    // "exportFOO=1" is a key named "exportFOO", not a stripped prefix.
    assert_eq!(
        parse_line("exportFOO=1"),
        Some(("exportFOO".to_string(), "1".to_string()))
    );
}

#[test]
fn test_write_entries() {
    let mut out = Vec::new();
    write_entries(&mut out, [("A", "1"), ("B", "two words"), ("C", "")]).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "A=1\nB=\"two words\"\nC=\"\"\n"
    );
}

#[test]
fn test_parse_document_counts_skips() {
    let report = parse_document("# comment\n\nexport FOO=bar\nbadline\n=x\nBAZ=\"q\"\n");
    assert_eq!(
        report.entries,
        vec![
            ("FOO".to_string(), "bar".to_string()),
            ("BAZ".to_string(), "q".to_string())
        ]
    );
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_round_trip_is_lossy_for_newlines() {
    // The quoted value spans two physical lines; reading it back line by line
    // keeps only the broken first half.
    let line = format_line("MULTI", "one\ntwo");
    let report = parse_document(&line);
    assert_eq!(
        report.entries,
        vec![("MULTI".to_string(), "\"one".to_string())]
    );
}
