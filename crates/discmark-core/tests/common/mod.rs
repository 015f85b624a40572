#![allow(dead_code)]

//! Shared helpers for integration tests: a mock catalog API and a client
//! pointed at it with millisecond backoff.

use std::time::Duration;

use discmark_core::catalog::{CatalogClient, ClientOptions};
use discmark_core::retry::RetryPolicy;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER_AGENT: &str = "discmark-test/0.1";

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(ClientOptions {
        base_url: server.uri(),
        user_agent: TEST_USER_AGENT.to_string(),
        token: None,
        retry: RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(1),
        },
    })
    .expect("build client")
}

pub fn release_body() -> Value {
    json!({
        "id": 123,
        "artists": [{"name": "Daft Punk", "id": 1}, {"name": "Romanthony", "id": 2}],
        "title": "One More Time",
        "genres": ["Electronic", "Pop"],
        "styles": ["House", "Disco"],
        "year": 2000
    })
}

pub fn master_body() -> Value {
    json!({
        "id": 456,
        "artists": [{"name": "Boards Of Canada"}],
        "title": "Music Has The Right To Children",
        "genres": ["Electronic"],
        "styles": ["IDM", "Downtempo"],
        "year": 1998
    })
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
