#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Move input focus to the URL field.
    FocusUrlField,
    /// A printable character typed into the focused input.
    CharTyped(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Submit the current URL field content for fetching.
    SubmitUrl,
    /// Reveal the response headers panel.
    ShowHeaders,
    /// Open the search prompt over the current content.
    BeginSearch,
    /// Close the search prompt, keeping the current matches.
    ConfirmSearch,
    /// Close the search prompt, discarding pattern and matches.
    CancelSearch,
    /// Advance the selected search match cyclically.
    NextResult,
    /// Dismiss the topmost panel or message.
    Dismiss,
    /// Previously stored URLs became available.
    HistoryLoaded(Vec<String>),
    /// Complete the URL field from the current history suggestion.
    AcceptSuggestion,
    /// A fetch finished. Completions carrying a stale token are discarded.
    FetchCompleted {
        token: crate::FetchToken,
        result: Result<crate::FetchSuccess, crate::FetchFailure>,
    },
    /// UI tick to animate the fetch spinner.
    Tick,
    /// Quit the application.
    Quit,
    /// Fallback for unbound keys.
    NoOp,
}
