use std::time::Duration;

use pretty_assertions::assert_eq;

use apilens_engine::{FetchError, FetchSettings, Fetcher, HttpFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_body_headers_and_elapsed_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"ala": 1}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let url = format!("{}/doc", server.uri());

    let outcome = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(outcome.body, "{\n  \"ala\": 1\n}");
    assert!(outcome.elapsed > Duration::ZERO);
    assert!(outcome
        .headers
        .iter()
        .any(|(name, value)| name == "content-type" && value == "application/json"));
}

#[tokio::test]
async fn non_json_bodies_are_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello, not json"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let url = format!("{}/plain", server.uri());

    let outcome = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(outcome.body, "hello, not json");
}

#[tokio::test]
async fn fetcher_maps_status_to_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err,
        FetchError::HttpStatus {
            code: 404,
            reason: "Not Found: Nothing matches the given URI".to_string(),
        }
    );
}

#[tokio::test]
async fn whole_success_range_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/created"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(FetchSettings::default());
    let url = format!("{}/created", server.uri());

    // Whole 2xx range counts as success, not just 200.
    assert!(fetcher.fetch(&url).await.is_ok());
}

#[tokio::test]
async fn fetcher_times_out_as_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = HttpFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err, FetchError::Connection("Connection Error".to_string()));
}

#[tokio::test]
async fn unparseable_url_is_rejected_without_io() {
    let fetcher = HttpFetcher::new(FetchSettings::default());
    let err = fetcher.fetch("htt").await.unwrap_err();
    assert_eq!(err, FetchError::InvalidUrl);
}
