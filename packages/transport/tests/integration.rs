use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use metacrawl_transport::{Fetch, HttpFetcher};
use url::Url;

#[tokio::test]
async fn test_fetch_returns_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest/meta-data/instance-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string("i-0123456789abcdef0"))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/latest/meta-data/instance-id", server.uri())).unwrap();

    let body = tokio::task::spawn_blocking(move || {
        let mut fetcher = HttpFetcher::new();
        fetcher.fetch(&url).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "i-0123456789abcdef0");
}

#[tokio::test]
async fn test_fetch_preserves_multiline_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest/meta-data/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("instance-id\nhostname\npublic-keys/\n"))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/latest/meta-data/", server.uri())).unwrap();

    let body = tokio::task::spawn_blocking(move || {
        let mut fetcher = HttpFetcher::new();
        fetcher.fetch(&url).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "instance-id\nhostname\npublic-keys/\n");
}

#[tokio::test]
async fn test_fetch_returns_error_bodies_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest/meta-data/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/latest/meta-data/missing", server.uri())).unwrap();

    let body = tokio::task::spawn_blocking(move || {
        let mut fetcher = HttpFetcher::new();
        fetcher.fetch(&url).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(body, "not found");
}

#[tokio::test]
async fn test_preflight_is_trivial_for_http() {
    let result = tokio::task::spawn_blocking(|| {
        let mut fetcher = HttpFetcher::new();
        fetcher.preflight()
    })
    .await
    .unwrap();

    assert!(result.is_ok());
}
