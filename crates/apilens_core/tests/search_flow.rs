use std::sync::Once;

use apilens_core::{
    update, Effect, FetchSuccess, HighlightStyle, Mode, Msg, SessionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(apilens_logging::initialize_for_tests);
}

/// Session already showing `body` as fetched content.
fn showing(body: &str) -> SessionState {
    let (mut state, _) = update(SessionState::new(""), Msg::FocusUrlField);
    for ch in "http://localhost/".chars() {
        (state, _) = update(state, Msg::CharTyped(ch));
    }
    let (state, effects) = update(state, Msg::SubmitUrl);
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartFetch { token, .. } => Some(*token),
            _ => None,
        })
        .expect("start fetch effect");
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            token,
            result: Ok(FetchSuccess {
                body: body.to_string(),
                headers: Vec::new(),
                elapsed_ms: 5,
            }),
        },
    );
    assert_eq!(state.mode(), Mode::ShowingContent);
    state
}

fn type_pattern(mut state: SessionState, pattern: &str) -> SessionState {
    for ch in pattern.chars() {
        (state, _) = update(state, Msg::CharTyped(ch));
    }
    state
}

#[test]
fn typing_a_pattern_previews_matches_live() {
    init_logging();
    let (state, _) = update(showing(r#"{"ala": 1}"#), Msg::BeginSearch);
    assert_eq!(state.mode(), Mode::EditingSearch);

    let state = type_pattern(state, "ala");
    let view = state.view();
    assert_eq!(view.match_count, 1);
    // The single match is pre-selected, not in a zeroth-before-first state.
    assert_eq!(view.selected_match, Some(0));
    assert_eq!(view.highlights.len(), 1);
    assert_eq!(view.highlights[0].style, HighlightStyle::Selected);
    assert_eq!(state.mode(), Mode::EditingSearch);
}

#[test]
fn backspace_reruns_the_search() {
    init_logging();
    let (state, _) = update(showing("abc abd"), Msg::BeginSearch);
    let state = type_pattern(state, "abc");
    assert_eq!(state.view().match_count, 1);

    let (state, _) = update(state, Msg::Backspace);
    assert_eq!(state.view().search_input, "ab");
    assert_eq!(state.view().match_count, 2);
}

#[test]
fn confirm_keeps_results_and_next_cycles_through_them() {
    init_logging();
    let (state, _) = update(showing("one two one two one"), Msg::BeginSearch);
    let state = type_pattern(state, "one");

    let (state, _) = update(state, Msg::ConfirmSearch);
    assert_eq!(state.mode(), Mode::Searching);
    assert_eq!(state.view().match_count, 3);
    assert_eq!(state.view().selected_match, Some(0));

    let (state, _) = update(state, Msg::NextResult);
    assert_eq!(state.view().selected_match, Some(1));
    let (state, _) = update(state, Msg::NextResult);
    assert_eq!(state.view().selected_match, Some(2));
    // Cyclic: one more step wraps around to the first match.
    let (state, _) = update(state, Msg::NextResult);
    assert_eq!(state.view().selected_match, Some(0));
}

#[test]
fn cancel_restores_unhighlighted_content() {
    init_logging();
    let (state, _) = update(showing("needle in a haystack"), Msg::BeginSearch);
    let state = type_pattern(state, "needle");
    assert_eq!(state.view().match_count, 1);

    let (state, _) = update(state, Msg::CancelSearch);
    assert_eq!(state.mode(), Mode::ShowingContent);
    let view = state.view();
    assert_eq!(view.search_input, "");
    assert_eq!(view.match_count, 0);
    assert!(view.highlights.is_empty());
    assert_eq!(view.body.as_deref(), Some("needle in a haystack"));
}

#[test]
fn dismiss_from_searching_clears_highlights() {
    init_logging();
    let (state, _) = update(showing("x y x"), Msg::BeginSearch);
    let state = type_pattern(state, "x");
    let (state, _) = update(state, Msg::ConfirmSearch);
    assert_eq!(state.mode(), Mode::Searching);

    let (state, _) = update(state, Msg::Dismiss);
    assert_eq!(state.mode(), Mode::ShowingContent);
    assert!(state.view().highlights.is_empty());
}

#[test]
fn search_is_unreachable_without_content() {
    init_logging();
    let state = SessionState::new("");
    let (state, effects) = update(state, Msg::BeginSearch);
    assert!(effects.is_empty());
    assert_eq!(state.mode(), Mode::Idle);
}

#[test]
fn new_fetch_clears_previous_search_state() {
    init_logging();
    let (state, _) = update(showing("term here"), Msg::BeginSearch);
    let state = type_pattern(state, "term");
    let (state, _) = update(state, Msg::ConfirmSearch);
    let (state, _) = update(state, Msg::Dismiss);

    let (mut state, _) = update(state, Msg::FocusUrlField);
    while !state.view().url_input.is_empty() {
        (state, _) = update(state, Msg::Backspace);
    }
    for ch in "http://localhost/other".chars() {
        (state, _) = update(state, Msg::CharTyped(ch));
    }
    let (state, effects) = update(state, Msg::SubmitUrl);
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartFetch { token, .. } => Some(*token),
            _ => None,
        })
        .unwrap();
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            token,
            result: Ok(FetchSuccess {
                body: "different".to_string(),
                headers: Vec::new(),
                elapsed_ms: 3,
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.search_input, "");
    assert_eq!(view.match_count, 0);
}
