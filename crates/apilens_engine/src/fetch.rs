use std::time::{Duration, Instant};

use apilens_logging::app_debug;

use crate::status::status_reason;
use crate::{FetchError, FetchOutcome};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One GET per call. Issues the request, measures latency, and classifies
/// the outcome. Timeouts are the transport's own and surface as
/// [`FetchError::Connection`].
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    settings: FetchSettings,
}

impl HttpFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|_| FetchError::InvalidUrl)?;
        let client = self.build_client()?;

        let started = Instant::now();
        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                reason: status_reason(status.as_u16()),
            });
        }

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.text().await.map_err(map_reqwest_error)?;
        // Elapsed covers the full exchange including reading the body.
        let elapsed = started.elapsed();

        Ok(FetchOutcome {
            body: prettify_json(body),
            headers,
            elapsed,
        })
    }
}

/// Bodies that parse as JSON are re-rendered pretty-printed for display and
/// search; anything else passes through verbatim.
fn prettify_json(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(body),
        Err(_) => body,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    app_debug!("transport failure: {err}");
    FetchError::Connection("Connection Error".to_string())
}
