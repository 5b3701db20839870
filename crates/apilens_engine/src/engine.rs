use std::sync::{mpsc, Arc};
use std::thread;

use apilens_logging::{app_info, app_warn};

use crate::fetch::{FetchSettings, Fetcher, HttpFetcher};
use crate::history::UrlStore;
use crate::{EngineEvent, FetchToken};

enum EngineCommand {
    Fetch { token: FetchToken, url: String },
    SaveUrl { url: String },
    LoadHistory,
}

/// Handle to the IO thread. Commands go in over a channel; completions come
/// back as [`EngineEvent`]s polled with [`EngineHandle::try_recv`], so the
/// caller can merge them into its own event stream.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, store: Arc<dyn UrlStore>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(HttpFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let store = store.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), store.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, token: FetchToken, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            token,
            url: url.into(),
        });
    }

    pub fn save_url(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SaveUrl { url: url.into() });
    }

    pub fn load_history(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadHistory);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    store: &dyn UrlStore,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { token, url } => {
            app_info!("fetch token={} url={}", token, url);
            let result = fetcher.fetch(&url).await;
            if let Err(err) = &result {
                app_info!("fetch token={} failed: {}", token, err);
            }
            let _ = event_tx.send(EngineEvent::FetchDone { token, result });
        }
        EngineCommand::SaveUrl { url } => {
            // Fire-and-forget relative to the display flow; a write failure
            // must not disturb the content already on screen.
            if let Err(err) = store.save(&url).await {
                app_warn!("failed to persist url {}: {}", url, err);
            }
        }
        EngineCommand::LoadHistory => {
            let urls = match store.load().await {
                Ok(urls) => urls,
                Err(err) => {
                    app_warn!("failed to load url history: {}", err);
                    Vec::new()
                }
            };
            let _ = event_tx.send(EngineEvent::HistoryLoaded(urls));
        }
    }
}
