// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::vars::{ExportArgs, ListArgs};
use crate::cmd::check::write_report;
use crate::cmd::export::{export_path, export_store};
use crate::cmd::list::write_list;
use crate::config::Config;
use crate::core::dotenv::parse_document;
use crate::core::env::MemoryEnv;
use crate::core::store::VarStore;
use crate::error::EnvoyError;

fn store(vars: &[(&str, &str)]) -> VarStore {
    VarStore::new(MemoryEnv::with_vars(vars.iter().copied()))
}

#[test]
fn test_list_all_and_filtered() {
    let store = store(&[("B", "two words"), ("A", "1")]);

    let mut out = Vec::new();
    write_list(&store, &ListArgs::default(), &mut out).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r#"
    A=1
    B="two words"
    "#);

    let mut out = Vec::new();
    let args = ListArgs {
        filter: Some("WORD".to_string()),
        json: false,
    };
    write_list(&store, &args, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "B=\"two words\"\n");
}

#[test]
fn test_list_json() {
    let store = store(&[("B", "say \"hi\""), ("A", "1")]);
    let args = ListArgs {
        filter: None,
        json: true,
    };
    let mut out = Vec::new();
    write_list(&store, &args, &mut out).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, serde_json::json!({ "A": "1", "B": "say \"hi\"" }));
}

#[test]
fn test_check_report() {
    let report = parse_document("# header\nA=1\nnot a pair\nexport B = \"x y\"\n\n=orphan\n");

    let mut out = Vec::new();
    write_report(&report, false, &mut out).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    A
    B
    2 entries, 2 skipped
    ");

    let mut out = Vec::new();
    write_report(&report, true, &mut out).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r#"
    A=1
    B="x y"
    2 entries, 2 skipped
    "#);
}

#[test]
fn test_export_path_prefers_argument() {
    let config = Config::default();
    let args = ExportArgs {
        path: Some(PathBuf::from("out/prod.env")),
    };
    assert_eq!(export_path(&args, &config), PathBuf::from("out/prod.env"));
    assert_eq!(
        export_path(&ExportArgs::default(), &config),
        PathBuf::from(".env")
    );
}

#[test]
fn test_export_store_writes_file() {
    let temp = tempfile::tempdir().unwrap();
    let target = temp.path().join("nested").join("vars.env");
    let store = store(&[("B", "2"), ("A", "1")]);

    let args = ExportArgs {
        path: Some(target.clone()),
    };
    let written = export_store(&store, &args, &Config::default()).unwrap();
    assert_eq!(written, target);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "A=1\nB=2\n");
}

#[test]
fn test_export_store_failure_is_store_error() {
    let temp = tempfile::tempdir().unwrap();
    let blocker = temp.path().join("file");
    std::fs::write(&blocker, "").unwrap();

    let args = ExportArgs {
        path: Some(blocker.join("child.env")),
    };
    let err = export_store(&store(&[]), &args, &Config::default()).unwrap_err();
    assert!(matches!(err, EnvoyError::Store(_)), "{err:?}");
}
