//! Apilens core: pure session state machine and view-model helpers.
mod address;
mod effect;
mod msg;
mod search;
mod state;
mod update;
mod view_model;

pub use address::{validate, CheckedUrl, InvalidUrl};
pub use effect::Effect;
pub use msg::Msg;
pub use search::{HighlightSpan, HighlightStyle, SearchResults};
pub use state::{FetchFailure, FetchSuccess, FetchToken, Mode, Response, SessionState};
pub use update::update;
pub use view_model::SessionViewModel;
