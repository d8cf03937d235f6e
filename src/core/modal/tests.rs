// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Action, Controls, ModalState, Mode, Motion, Prefix, Step, normal};

/// Records every capability call.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<String>,
    refuse_forms: bool,
}

impl Controls for Recorder {
    fn motion(&mut self, motion: Motion) {
        self.calls.push(format!("{motion:?}"));
    }

    fn next_match(&mut self, backwards: bool) {
        self.calls.push(format!("next_match(backwards={backwards})"));
    }

    fn begin_search(&mut self) {
        self.calls.push("begin_search".to_string());
    }

    fn begin_command(&mut self) {
        self.calls.push("begin_command".to_string());
    }

    fn edit(&mut self, append: bool) -> bool {
        self.calls.push(format!("edit(append={append})"));
        !self.refuse_forms
    }

    fn add(&mut self) -> bool {
        self.calls.push("add".to_string());
        !self.refuse_forms
    }

    fn delete(&mut self) {
        self.calls.push("delete".to_string());
    }

    fn cancel(&mut self) {
        self.calls.push("cancel".to_string());
    }

    fn pending(&mut self, prefix: &str) {
        self.calls.push(format!("pending({prefix})"));
    }
}

fn feed(keys: &[&str]) -> (ModalState, Recorder, Vec<bool>) {
    let mut state = ModalState::new();
    let mut rec = Recorder::default();
    let handled = keys
        .iter()
        .map(|k| state.handle_key(k, &mut rec))
        .collect();
    (state, rec, handled)
}

#[test]
fn test_count_then_motion() {
    let (state, rec, handled) = feed(&["3", "j"]);
    assert_eq!(rec.calls, ["pending(-- 3)", "Down(3)"]);
    assert_eq!(handled, [true, true]);
    assert!(state.prefix().is_empty());
}

#[test]
fn test_multi_digit_count_allows_inner_zero() {
    let (_, rec, _) = feed(&["1", "0", "k"]);
    assert_eq!(rec.calls, ["pending(-- 1)", "pending(-- 10)", "Up(10)"]);
}

#[test]
fn test_bare_zero_is_first_column() {
    let (_, rec, _) = feed(&["0"]);
    assert_eq!(rec.calls, ["FirstColumn"]);
}

#[test]
fn test_gg_and_g_then_other() {
    let (_, rec, handled) = feed(&["g", "g", "g", "j", "j"]);
    assert_eq!(
        rec.calls,
        ["pending(-- g)", "FirstRow", "pending(-- g)", "Down(1)"]
    );
    // "g j" is consumed but does nothing.
    assert_eq!(handled, [true, true, true, true, true]);
}

#[test]
fn test_count_is_dropped_by_gg() {
    let (_, rec, _) = feed(&["5", "g", "g", "j"]);
    assert_eq!(
        rec.calls,
        ["pending(-- 5)", "pending(-- 5g)", "FirstRow", "Down(1)"]
    );
}

#[test]
fn test_unrecognised_key_clears_prefix() {
    let (state, rec, handled) = feed(&["4", "z", "j"]);
    assert_eq!(handled, [true, false, true]);
    assert_eq!(rec.calls, ["pending(-- 4)", "Down(1)"]);
    assert!(state.prefix().is_empty());
}

#[test]
fn test_reset_prefix_drops_pending_count() {
    let (mut state, mut rec, _) = feed(&["7", "g"]);
    state.reset_prefix();
    assert!(state.prefix().is_empty());
    assert_eq!(state.mode(), Mode::Normal);

    state.handle_key("j", &mut rec);
    assert_eq!(rec.calls, ["pending(-- 7)", "pending(-- 7g)", "Down(1)"]);
}

#[test]
fn test_action_table() {
    let keys = ["h", "l", "G", "$", "n", "N", "x", "ESC"];
    let (state, rec, _) = feed(&keys);
    insta::assert_debug_snapshot!(rec.calls, @r#"
    [
        "Left",
        "Right",
        "LastRow",
        "LastColumn",
        "next_match(backwards=false)",
        "next_match(backwards=true)",
        "delete",
        "cancel",
    ]
    "#);
    assert_eq!(state.mode(), Mode::Normal);
}

#[test]
fn test_mode_transitions() {
    let cases = [
        ("/", Mode::Search),
        (":", Mode::Command),
        ("i", Mode::Insert),
        ("a", Mode::Insert),
        ("A", Mode::Insert),
    ];
    for (key, expected) in cases {
        let (mut state, _, _) = feed(&[key]);
        assert_eq!(state.mode(), expected, "after {key}");

        // Non-normal modes do not interpret keys.
        let mut rec = Recorder::default();
        assert!(!state.handle_key("j", &mut rec));
        assert!(rec.calls.is_empty());

        state.finish();
        assert_eq!(state.mode(), Mode::Normal);
    }
}

#[test]
fn test_refused_form_stays_normal() {
    let mut state = ModalState::new();
    let mut rec = Recorder {
        refuse_forms: true,
        ..Recorder::default()
    };
    assert!(state.handle_key("i", &mut rec));
    assert!(state.handle_key("A", &mut rec));
    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(rec.calls, ["edit(append=false)", "add"]);
}

#[test]
fn test_normal_transition_is_pure() {
    let start = Prefix::default();
    let (after_two, step) = normal(&start, "2");
    assert_eq!(step, Step::Pending);
    assert_eq!(after_two.count(), 2);
    assert_eq!(start, Prefix::default());

    let (cleared, step) = normal(&after_two, "k");
    assert_eq!(step, Step::Dispatch(Action::Move(Motion::Up(2))));
    assert!(cleared.is_empty());
}

#[test]
fn test_huge_count_saturates() {
    let mut prefix = Prefix::default();
    for _ in 0..40 {
        prefix = normal(&prefix, "9").0;
    }
    assert_eq!(prefix.count(), usize::MAX);
}

#[test]
fn test_mode_display_and_last_search() {
    let mut state = ModalState::new();
    state.set_last_search("path");
    assert_eq!(state.last_search(), "path");
    let names: Vec<String> = [Mode::Normal, Mode::Insert, Mode::Command, Mode::Search]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["NORMAL", "INSERT", "COMMAND", "SEARCH"]);
}
