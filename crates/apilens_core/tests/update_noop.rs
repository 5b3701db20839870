use apilens_core::{update, Msg, SessionState};

#[test]
fn update_is_noop() {
    let state = SessionState::new("");
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_is_noop() {
    let state = SessionState::new("http://localhost/");
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
