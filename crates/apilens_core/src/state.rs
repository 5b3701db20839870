use crate::search::SearchResults;
use crate::view_model::SessionViewModel;

/// Monotonically increasing id for the most recent submit; completions
/// carrying an older token are discarded.
pub type FetchToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    EditingUrl,
    Fetching,
    ShowingContent,
    ShowingError,
    ShowingHeaders,
    EditingSearch,
    Searching,
}

/// A successfully fetched response as displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: String,
    pub headers: Vec<(String, String)>,
}

/// Payload of a successful fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSuccess {
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub elapsed_ms: u64,
}

/// Classified fetch failure, surfaced as a message and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    InvalidUrl,
    Connection(String),
    HttpStatus { code: u16, reason: String },
}

impl FetchFailure {
    /// The user-facing message for this failure.
    pub fn message(&self) -> String {
        match self {
            FetchFailure::InvalidUrl => "Invalid URL".to_string(),
            FetchFailure::Connection(message) => message.clone(),
            FetchFailure::HttpStatus { reason, .. } => reason.clone(),
        }
    }
}

/// Live state of one interactive session, owned by the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) mode: Mode,
    pub(crate) url_input: String,
    pub(crate) search_input: String,
    pub(crate) response: Option<Response>,
    pub(crate) error: Option<String>,
    pub(crate) results: SearchResults,
    pub(crate) last_response_ms: Option<u64>,
    pub(crate) current_token: FetchToken,
    pub(crate) submitted_url: Option<String>,
    pub(crate) history: Vec<String>,
}

impl SessionState {
    /// Fresh idle session with the URL field pre-populated from the
    /// start-up argument (possibly empty).
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Idle,
            url_input: initial_url.into(),
            search_input: String::new(),
            response: None,
            error: None,
            results: SearchResults::default(),
            last_response_ms: None,
            current_token: 0,
            submitted_url: None,
            history: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read-only projection for the rendering layer.
    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            mode: self.mode,
            url_input: self.url_input.clone(),
            url_suggestion: self.suggestion().map(ToOwned::to_owned),
            search_input: self.search_input.clone(),
            body: self.response.as_ref().map(|r| r.body.clone()),
            headers: self
                .response
                .as_ref()
                .map(|r| r.headers.clone())
                .unwrap_or_default(),
            error: self.error.clone(),
            highlights: self.results.highlight_plan(),
            match_count: self.results.len(),
            selected_match: self.results.selected(),
            response_time_ms: self.last_response_ms,
        }
    }

    /// First stored URL with the current field text as a strict prefix.
    pub(crate) fn suggestion(&self) -> Option<&str> {
        if self.url_input.is_empty() {
            return None;
        }
        self.history
            .iter()
            .find(|url| url.starts_with(&self.url_input) && url.as_str() != self.url_input)
            .map(String::as_str)
    }

    /// Mode to fall back to when a panel or message is dismissed: the last
    /// fetched content is never lost by dismissal.
    pub(crate) fn fallback_mode(&self) -> Mode {
        if self.response.is_some() {
            Mode::ShowingContent
        } else {
            Mode::Idle
        }
    }

    pub(crate) fn refresh_search(&mut self) {
        let body = self.response.as_ref().map(|r| r.body.as_str()).unwrap_or("");
        self.results = SearchResults::search(&self.search_input, body);
    }

    pub(crate) fn clear_search(&mut self) {
        self.search_input.clear();
        self.results = SearchResults::default();
    }

    /// Adds a URL to the in-memory suggestion list, keeping it sorted and
    /// free of duplicates to mirror the persisted set.
    pub(crate) fn remember_url(&mut self, url: &str) {
        if let Err(pos) = self.history.binary_search_by(|probe| probe.as_str().cmp(url)) {
            self.history.insert(pos, url.to_string());
        }
    }
}
