//! Catalog client against a mock API: dispatch, mapping, headers, retry.

mod common;

use discmark_core::catalog::{CatalogClient, ClientOptions};
use discmark_core::retry::{FetchError, RetryPolicy};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn release_url_hits_release_endpoint() {
    let server = MockServer::start().await;
    common::mount_json(&server, "/releases/123", common::release_body()).await;

    let client = common::client_for(&server);
    let url = "https://www.discogs.com/release/123-One-More-Time";
    let rec = client.fetch_url(url).await.unwrap();
    assert_eq!(rec.artist, "Daft Punk, Romanthony");
    assert_eq!(rec.title, "One More Time");
    assert_eq!(rec.genre, "Electronic / Pop");
    assert_eq!(rec.style, "House / Disco");
    assert_eq!(rec.year, "2000");
    assert_eq!(rec.source_url, url);
}

#[tokio::test]
async fn master_url_hits_master_endpoint() {
    let server = MockServer::start().await;
    common::mount_json(&server, "/masters/456", common::master_body()).await;

    let client = common::client_for(&server);
    let rec = client
        .fetch_url("https://www.discogs.com/ja/master/456")
        .await
        .unwrap();
    assert_eq!(rec.artist, "Boards Of Canada");
    assert_eq!(rec.year, "1998");
}

#[tokio::test]
async fn sends_user_agent_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/releases/1"))
        .and(header("user-agent", "ua-check/1.0"))
        .and(header("authorization", "Discogs token=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::release_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(ClientOptions {
        base_url: server.uri(),
        user_agent: "ua-check/1.0".to_string(),
        token: Some("secret".to_string()),
        retry: RetryPolicy::default(),
    })
    .unwrap();
    client
        .fetch_url("https://www.discogs.com/release/1")
        .await
        .unwrap();
}

#[tokio::test]
async fn throttled_then_ok_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/releases/7"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/releases/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::release_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let rec = client
        .fetch_url("https://www.discogs.com/release/7")
        .await
        .unwrap();
    assert_eq!(rec.title, "One More Time");
}

#[tokio::test]
async fn persistent_500_fails_with_final_status_after_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/masters/9"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .fetch_url("https://www.discogs.com/master/9")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500 }));
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/releases/404"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .fetch_url("https://www.discogs.com/release/404")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/releases/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .fetch_url("https://www.discogs.com/release/5")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = CatalogClient::new(ClientOptions {
        base_url: uri,
        retry: RetryPolicy {
            max_retries: 1,
            base_delay: Duration::from_millis(1),
        },
        ..ClientOptions::default()
    })
    .unwrap();
    let err = client
        .fetch_url("https://www.discogs.com/release/1")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
