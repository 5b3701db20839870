use crate::{validate, Effect, FetchFailure, FetchSuccess, FetchToken, Mode, Msg, Response, SessionState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages arrive in a single total order; fetch completions are ordinary
/// messages in that order, so no transition ever races another.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::FocusUrlField => {
            state.mode = Mode::EditingUrl;
            Vec::new()
        }
        Msg::CharTyped(ch) => {
            match state.mode {
                Mode::EditingUrl => state.url_input.push(ch),
                Mode::EditingSearch => {
                    state.search_input.push(ch);
                    state.refresh_search();
                }
                _ => {}
            }
            Vec::new()
        }
        Msg::Backspace => {
            match state.mode {
                Mode::EditingUrl => {
                    state.url_input.pop();
                }
                Mode::EditingSearch => {
                    state.search_input.pop();
                    state.refresh_search();
                }
                _ => {}
            }
            Vec::new()
        }
        Msg::SubmitUrl => submit_url(&mut state),
        Msg::ShowHeaders => {
            if state.mode == Mode::ShowingContent && state.response.is_some() {
                state.mode = Mode::ShowingHeaders;
            }
            Vec::new()
        }
        Msg::BeginSearch => {
            if state.mode == Mode::ShowingContent {
                state.clear_search();
                state.mode = Mode::EditingSearch;
            }
            Vec::new()
        }
        Msg::ConfirmSearch => {
            // Keep the current result set and cursor; only the prompt closes.
            if state.mode == Mode::EditingSearch {
                state.mode = Mode::Searching;
            }
            Vec::new()
        }
        Msg::CancelSearch => {
            if state.mode == Mode::EditingSearch {
                state.clear_search();
                state.mode = Mode::ShowingContent;
            }
            Vec::new()
        }
        Msg::NextResult => {
            if state.mode == Mode::Searching {
                state.results.select_next();
            }
            Vec::new()
        }
        Msg::Dismiss => {
            dismiss(&mut state);
            Vec::new()
        }
        Msg::HistoryLoaded(urls) => {
            state.history = urls;
            Vec::new()
        }
        Msg::AcceptSuggestion => {
            if state.mode == Mode::EditingUrl {
                if let Some(suggestion) = state.suggestion() {
                    state.url_input = suggestion.to_string();
                }
            }
            Vec::new()
        }
        Msg::FetchCompleted { token, result } => fetch_completed(&mut state, token, result),
        Msg::Quit => vec![Effect::Quit],
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_url(state: &mut SessionState) -> Vec<Effect> {
    let raw = state.url_input.trim().to_string();
    if raw.is_empty() {
        state.error = Some("Url is required".to_string());
        state.mode = Mode::ShowingError;
        return Vec::new();
    }
    match validate(&raw) {
        Err(_) => {
            state.error = Some("Invalid URL".to_string());
            state.mode = Mode::ShowingError;
            Vec::new()
        }
        Ok(checked) => {
            // Each submit gets a fresh token; an in-flight request is not
            // aborted, its completion just becomes stale.
            state.current_token += 1;
            state.submitted_url = Some(raw);
            state.error = None;
            state.mode = Mode::Fetching;
            vec![Effect::StartFetch {
                token: state.current_token,
                url: checked.as_str().to_string(),
            }]
        }
    }
}

fn fetch_completed(
    state: &mut SessionState,
    token: FetchToken,
    result: Result<FetchSuccess, FetchFailure>,
) -> Vec<Effect> {
    if token != state.current_token {
        // Superseded by a later submit.
        return Vec::new();
    }
    match result {
        Ok(success) => {
            state.response = Some(Response {
                body: success.body,
                headers: success.headers,
            });
            state.last_response_ms = Some(success.elapsed_ms);
            state.error = None;
            state.clear_search();
            state.mode = Mode::ShowingContent;
            match state.submitted_url.take() {
                Some(url) => {
                    state.remember_url(&url);
                    vec![Effect::PersistUrl { url }]
                }
                None => Vec::new(),
            }
        }
        Err(failure) => {
            state.error = Some(failure.message());
            state.mode = Mode::ShowingError;
            Vec::new()
        }
    }
}

fn dismiss(state: &mut SessionState) {
    match state.mode {
        Mode::ShowingError => {
            state.error = None;
            state.mode = state.fallback_mode();
        }
        Mode::ShowingHeaders => {
            state.mode = Mode::ShowingContent;
        }
        Mode::Searching | Mode::EditingSearch => {
            state.clear_search();
            state.mode = Mode::ShowingContent;
        }
        Mode::EditingUrl => {
            state.mode = state.fallback_mode();
        }
        // Dismiss with nothing to dismiss is a no-op, never an error.
        Mode::Idle | Mode::Fetching | Mode::ShowingContent => {}
    }
}
