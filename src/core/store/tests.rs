// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the variable store.

use std::sync::Arc;

use tempfile::TempDir;

use super::{DEFAULT_EXPORT_PATH, VarStore, Variable};
use crate::core::env::{EnvPort, MemoryEnv};
use crate::error::StoreError;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn seeded(vars: &[(&str, &str)]) -> (VarStore, Arc<MemoryEnv>) {
    let env = Arc::new(MemoryEnv::with_vars(vars.iter().copied()));
    (VarStore::new(Arc::clone(&env)), env)
}

fn is_sorted_unique(keys: &[String]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn test_snapshot_is_sorted_and_clean() {
    let (store, _) = seeded(&[("b", "2"), ("C", "3"), ("a", "1")]);
    // Code-point order: uppercase sorts before lowercase.
    assert_eq!(store.list_keys(), ["C", "a", "b"]);
    assert_eq!(store.count(), 3);
    assert!(!store.dirty());
    assert_eq!(store.query(), "");
    assert!(store.list_keys().iter().all(|k| !store.get(k).unwrap().modified));
}

#[test]
fn test_upsert_keeps_order_sorted() {
    let (store, _) = seeded(&[]);
    for key in ["M", "A", "Z", "M", "B", "A", "a"] {
        store.upsert(key, "x");
        assert!(is_sorted_unique(&store.list_keys()));
    }
    assert_eq!(store.list_keys(), ["A", "B", "M", "Z", "a"]);
    assert_eq!(store.len_total(), 5);
}

#[test]
fn test_upsert_marks_modified_and_writes_through() {
    let (store, env) = seeded(&[("KEEP", "1")]);
    store.upsert("NEW", "value");
    store.upsert("KEEP", "2");

    assert!(store.dirty());
    assert_eq!(
        store.get("NEW"),
        Some(Variable {
            key: "NEW".to_string(),
            value: "value".to_string(),
            modified: true,
        })
    );
    assert_eq!(env.get("NEW").as_deref(), Some("value"));
    assert_eq!(env.get("KEEP").as_deref(), Some("2"));
}

#[test]
fn test_upsert_with_unrepresentable_key_stays_in_store() {
    let (store, env) = seeded(&[]);
    store.upsert("A=B", "1");
    assert!(store.get("A=B").is_some());
    assert!(env.to_map().is_empty());
}

#[test]
fn test_delete_removes_from_view_and_env() {
    let (store, env) = seeded(&[("A", "1"), ("B", "2")]);
    store.delete("A");
    assert_eq!(store.list_keys(), ["B"]);
    assert!(store.get("A").is_none());
    assert!(env.get("A").is_none());
    assert!(store.dirty());
}

#[test]
fn test_delete_absent_key_still_marks_dirty() {
    let (store, env) = seeded(&[("A", "1")]);
    env.set("GHOST", "boo").unwrap();
    store.delete("GHOST");
    assert!(store.dirty());
    assert_eq!(store.list_keys(), ["A"]);
    // The unset is attempted even though the store never knew the key.
    assert!(env.get("GHOST").is_none());
}

#[test]
fn test_filter_matches_key_or_value_case_insensitively() {
    let (store, _) = seeded(&[
        ("HOME", "/home/me"),
        ("PATH", "/usr/bin"),
        ("EDITOR", "vim"),
        ("Shell", "/bin/zsh"),
    ]);

    store.filter("home");
    assert_eq!(store.list_keys(), ["HOME"]);

    store.filter("BIN");
    assert_eq!(store.list_keys(), ["PATH", "Shell"]);

    store.filter("sh");
    for key in store.list_keys() {
        let var = store.get(&key).unwrap();
        assert!(
            var.key.to_lowercase().contains("sh") || var.value.to_lowercase().contains("sh"),
            "{key} should match"
        );
    }

    store.filter("");
    assert_eq!(store.list_keys(), ["EDITOR", "HOME", "PATH", "Shell"]);
    assert!(!store.dirty(), "filtering is not a mutation");

    store.filter("vim");
    let visible = store.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].key, "EDITOR");
}

#[test]
fn test_upsert_reapplies_filter() {
    let (store, _) = seeded(&[("ALPHA", "1")]);
    store.filter("alp");
    store.upsert("BETA", "2");
    store.upsert("ALPINE", "3");
    assert_eq!(store.list_keys(), ["ALPHA", "ALPINE"]);
    assert_eq!(store.query(), "alp");
}

#[test]
fn test_delete_updates_filtered_view() {
    let (store, _) = seeded(&[("A1", "x"), ("A2", "x"), ("B", "y")]);
    store.filter("a");
    store.delete("A1");
    assert_eq!(store.list_keys(), ["A2"]);
}

#[test]
fn test_get_by_index_bounds() {
    let (store, _) = seeded(&[("A", "1"), ("B", "2"), ("C", "3")]);
    store.filter("2");
    assert_eq!(store.count(), 1);
    assert_eq!(store.get_by_index(0).map(|v| v.key), Some("B".to_string()));
    assert!(store.get_by_index(1).is_none());

    store.filter("");
    for i in 0..store.count() {
        assert_eq!(store.get_by_index(i).unwrap().key, store.list_keys()[i]);
    }
    assert!(store.get_by_index(store.count()).is_none());
    assert_eq!(store.position("C"), Some(2));
    assert_eq!(store.position("nope"), None);
}

#[test]
fn test_load_from_env_discards_changes() {
    let (store, env) = seeded(&[("A", "1")]);
    store.upsert("B", "2");
    store.filter("b");
    env.set("C", "3").unwrap();

    store.load_from_env();

    // B was written through, so it survives the reload, unmodified.
    assert_eq!(store.list_keys(), ["A", "B", "C"]);
    assert!(!store.get("B").unwrap().modified);
    assert!(!store.dirty());
    assert_eq!(store.query(), "");
}

#[test]
fn test_export_writes_full_order_ignoring_filter() {
    let temp = temp_dir();
    let (store, _) = seeded(&[("B", "2"), ("A", "1")]);
    store.filter("1");
    assert_eq!(store.list_keys(), ["A"]);

    let path = temp.path().join("out.env");
    store.export(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A=1\nB=2\n");
}

#[test]
fn test_export_creates_parent_dirs_and_quotes() {
    let temp = temp_dir();
    let (store, _) = seeded(&[("EMPTY", ""), ("MSG", "hello world"), ("Q", "say \"hi\"")]);
    let path = temp.path().join("nested/deeper/vars.env");

    let written = store.export(&path).unwrap();
    assert_eq!(written, path);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "EMPTY=\"\"\nMSG=\"hello world\"\nQ=\"say \\\"hi\\\"\"\n"
    );
}

#[test]
fn test_export_into_file_as_directory_fails() {
    let temp = temp_dir();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let (store, _) = seeded(&[("A", "1")]);

    let err = store.export(blocker.join("out.env")).unwrap_err();
    assert!(matches!(err, StoreError::Export { .. }), "{err:?}");
}

#[test]
fn test_default_export_path_constant() {
    assert_eq!(DEFAULT_EXPORT_PATH, ".env");
}

#[test]
fn test_import_counts_only_applied_lines() {
    let temp = temp_dir();
    let path = temp.path().join("in.env");
    std::fs::write(&path, "# comment\n\nexport FOO=bar\nbadline\n").unwrap();
    let (store, env) = seeded(&[]);

    assert_eq!(store.import(&path).unwrap(), 1);
    assert_eq!(store.list_keys(), ["FOO"]);
    assert_eq!(store.get("FOO").unwrap().value, "bar");
    assert_eq!(env.get("FOO").as_deref(), Some("bar"));
    assert!(store.dirty());
}

#[test]
fn test_import_handles_crlf_and_quotes() {
    let temp = temp_dir();
    let path = temp.path().join("win.env");
    std::fs::write(&path, "A=\"x y\"\r\nB = 2 \r\n=skip\r\n").unwrap();
    let (store, _) = seeded(&[]);

    assert_eq!(store.import(&path).unwrap(), 2);
    assert_eq!(store.get("A").unwrap().value, "x y");
    assert_eq!(store.get("B").unwrap().value, "2");
}

#[test]
fn test_import_errors() {
    let temp = temp_dir();
    let (store, _) = seeded(&[]);

    assert!(matches!(store.import(""), Err(StoreError::MissingPath)));
    assert!(matches!(
        store.import(temp.path().join("missing.env")),
        Err(StoreError::Import { .. })
    ));
    assert!(!store.dirty());
}

#[test]
fn test_export_import_round_trip() {
    let temp = temp_dir();
    let path = temp.path().join("rt.env");
    let (source, _) = seeded(&[("A", "1"), ("B", "2")]);
    source.export(&path).unwrap();

    let (target, _) = seeded(&[]);
    assert_eq!(target.import(&path).unwrap(), 2);
    assert_eq!(target.get("A").unwrap().value, "1");
    assert_eq!(target.get("B").unwrap().value, "2");
}

#[test]
fn test_concurrent_readers_and_writer() {
    let (store, _) = seeded(&[("SEED", "0")]);
    let store = Arc::new(store);

    std::thread::scope(|s| {
        let writer = Arc::clone(&store);
        s.spawn(move || {
            for i in 0..200 {
                writer.upsert(&format!("K{i:03}"), "v");
            }
        });
        for _ in 0..4 {
            let reader = Arc::clone(&store);
            s.spawn(move || {
                for _ in 0..200 {
                    let keys = reader.list_keys();
                    assert!(keys.windows(2).all(|w| w[0] < w[1]));
                }
            });
        }
    });

    assert_eq!(store.len_total(), 201);
}
