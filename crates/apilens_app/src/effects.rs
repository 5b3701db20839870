//! Bridges core effects to the IO engine and engine events back to messages.

use std::sync::Arc;

use apilens_core::{Effect, FetchFailure, FetchSuccess, Msg};
use apilens_engine::{
    EngineEvent, EngineHandle, FetchError, FetchOutcome, FetchSettings, TempFileStorage, UrlStore,
};
use apilens_logging::app_info;

pub struct EffectRunner {
    engine: EngineHandle,
    quit: bool,
}

impl EffectRunner {
    pub fn new() -> Self {
        let store: Arc<dyn UrlStore> = Arc::new(TempFileStorage::new());
        let engine = EngineHandle::new(FetchSettings::default(), store);
        // Seed URL suggestions; the result arrives as an ordinary event.
        engine.load_history();
        Self {
            engine,
            quit: false,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFetch { token, url } => {
                    app_info!("StartFetch token={} url={}", token, url);
                    self.engine.fetch(token, url);
                }
                Effect::PersistUrl { url } => {
                    self.engine.save_url(url);
                }
                Effect::Quit => {
                    self.quit = true;
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Next engine completion, translated into a session message.
    pub fn poll_engine(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::FetchDone { token, result } => Msg::FetchCompleted {
                token,
                result: result.map(into_success).map_err(into_failure),
            },
            EngineEvent::HistoryLoaded(urls) => Msg::HistoryLoaded(urls),
        })
    }
}

fn into_success(outcome: FetchOutcome) -> FetchSuccess {
    FetchSuccess {
        body: outcome.body,
        headers: outcome.headers,
        elapsed_ms: outcome.elapsed.as_millis() as u64,
    }
}

fn into_failure(err: FetchError) -> FetchFailure {
    match err {
        FetchError::InvalidUrl => FetchFailure::InvalidUrl,
        FetchError::Connection(message) => FetchFailure::Connection(message),
        FetchError::HttpStatus { code, reason } => FetchFailure::HttpStatus { code, reason },
    }
}
