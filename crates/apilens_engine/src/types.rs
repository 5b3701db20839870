use std::time::Duration;

use thiserror::Error;

/// Monotonically increasing id tagged onto each submit; the session layer
/// drops completions whose token has been superseded.
pub type FetchToken = u64;

/// Successful fetch: decoded body text, headers in arrival order, and the
/// time the request took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub body: String,
    pub headers: Vec<(String, String)>,
    pub elapsed: Duration,
}

/// Classified fetch failure. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("{0}")]
    Connection(String),
    #[error("{reason}")]
    HttpStatus { code: u16, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchDone {
        token: FetchToken,
        result: Result<FetchOutcome, FetchError>,
    },
    HistoryLoaded(Vec<String>),
}
