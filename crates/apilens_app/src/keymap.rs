//! Key bindings: terminal key events plus the current mode become the
//! semantic messages the session controller consumes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use apilens_core::{Mode, Msg};

pub fn translate(key: KeyEvent, mode: Mode) -> Msg {
    // Windows terminals report key releases too.
    if key.kind == KeyEventKind::Release {
        return Msg::NoOp;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Msg::Quit,
            KeyCode::Char('l') => Msg::FocusUrlField,
            _ => Msg::NoOp,
        };
    }

    match mode {
        Mode::EditingUrl => match key.code {
            KeyCode::Enter => Msg::SubmitUrl,
            KeyCode::Esc => Msg::Dismiss,
            KeyCode::Tab => Msg::AcceptSuggestion,
            KeyCode::Backspace => Msg::Backspace,
            KeyCode::Char(ch) => Msg::CharTyped(ch),
            _ => Msg::NoOp,
        },
        Mode::EditingSearch => match key.code {
            KeyCode::Enter => Msg::ConfirmSearch,
            KeyCode::Esc => Msg::CancelSearch,
            KeyCode::Backspace => Msg::Backspace,
            KeyCode::Char(ch) => Msg::CharTyped(ch),
            _ => Msg::NoOp,
        },
        Mode::Searching => match key.code {
            KeyCode::Char('n') => Msg::NextResult,
            KeyCode::Char('q') => Msg::Quit,
            KeyCode::Esc => Msg::Dismiss,
            _ => Msg::NoOp,
        },
        Mode::Idle
        | Mode::Fetching
        | Mode::ShowingContent
        | Mode::ShowingError
        | Mode::ShowingHeaders => match key.code {
            KeyCode::Char('q') => Msg::Quit,
            KeyCode::Char('h') => Msg::ShowHeaders,
            KeyCode::Char('/') => Msg::BeginSearch,
            KeyCode::Enter => Msg::SubmitUrl,
            KeyCode::Esc => Msg::Dismiss,
            _ => Msg::NoOp,
        },
    }
}
