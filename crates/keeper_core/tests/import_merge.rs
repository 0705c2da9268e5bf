use std::sync::Once;

use keeper_core::{update, AppState, Effect, Msg, StatusKind};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(keeper_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::Submitted)
}

fn import(state: AppState, candidates: &[&str]) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ImportParsed(candidates.iter().map(|c| c.to_string()).collect()),
    )
}

#[test]
fn import_collapses_in_file_repeats_before_merging() {
    init_logging();
    let (state, _) = submit(AppState::new(), "Date");

    // "apple" collapses into "Apple" silently; only "Date" counts as skipped.
    let (state, effects) = import(state, &["Apple", "apple", "Date"]);

    assert_eq!(state.items(), ["Apple", "Date"]);
    assert_eq!(state.status().kind, StatusKind::Batch);
    assert_eq!(
        state.status().message,
        "Import complete: added 1, skipped 1 duplicate."
    );
    assert_eq!(
        effects,
        vec![Effect::PersistItems {
            items: vec!["Apple".to_string(), "Date".to_string()],
        }]
    );
}

#[test]
fn second_import_of_the_same_candidates_adds_nothing() {
    init_logging();
    let (state, _) = import(AppState::new(), &["Apple", "apple", "Date"]);
    assert_eq!(state.items(), ["Apple", "Date"]);

    let (state, effects) = import(state, &["Apple", "apple", "Date"]);
    assert_eq!(state.items(), ["Apple", "Date"]);
    assert_eq!(
        state.status().message,
        "Import complete: added 0, skipped 2 duplicates."
    );
    assert!(effects.is_empty());
}

#[test]
fn import_candidates_are_trimmed_and_blanks_dropped() {
    init_logging();
    let (state, _) = import(AppState::new(), &["  padded  ", "", "   "]);

    assert_eq!(state.items(), ["padded"]);
    assert_eq!(
        state.status().message,
        "Import complete: added 1, skipped 0 duplicates."
    );
}

#[test]
fn imported_uniques_are_prepended_in_file_order() {
    init_logging();
    let (state, _) = submit(AppState::new(), "Old");
    let (state, _) = import(state, &["first", "second"]);

    assert_eq!(state.items(), ["first", "second", "Old"]);
}

#[test]
fn failed_import_only_touches_the_status() {
    init_logging();
    let (state, _) = submit(AppState::new(), "Apple");

    let (state, effects) = update(
        state,
        Msg::ImportFailed {
            message: "Invalid JSON: expected value at line 1 column 1".to_string(),
        },
    );

    assert_eq!(state.items(), ["Apple"]);
    assert_eq!(state.status().kind, StatusKind::Error);
    assert_eq!(
        state.status().message,
        "Invalid JSON: expected value at line 1 column 1"
    );
    assert!(effects.is_empty());
}
