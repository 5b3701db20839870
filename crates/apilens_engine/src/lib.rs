//! Apilens engine: network IO and durable URL history.
mod engine;
mod fetch;
mod history;
mod status;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, HttpFetcher};
pub use history::{HistoryError, TempFileStorage, UrlStore, HISTORY_FILE_NAME};
pub use status::status_reason;
pub use types::{EngineEvent, FetchError, FetchOutcome, FetchToken};
