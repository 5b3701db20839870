use crate::search::HighlightSpan;
use crate::state::Mode;

/// Everything the rendering layer needs for one frame. Observed read-only;
/// recomputed from [`crate::SessionState`] on each processed message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub mode: Mode,
    pub url_input: String,
    pub url_suggestion: Option<String>,
    pub search_input: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    pub error: Option<String>,
    pub highlights: Vec<HighlightSpan>,
    pub match_count: usize,
    pub selected_match: Option<usize>,
    pub response_time_ms: Option<u64>,
}
