// Integration tests for the TTL-cached accessor against a mock metrics API.

use std::time::Duration;

use serde_json::json;
use tridash::{CachedAccessor, MetricsClient};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn accessor(server: &MockServer, ttl: Duration) -> CachedAccessor {
    let client = MetricsClient::new(
        format!("{}/athlete/metrics", server.uri()),
        "test-key",
        Duration::from_secs(5),
    )
    .unwrap();
    CachedAccessor::new(client, ttl)
}

#[tokio::test]
async fn test_success_returns_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metrics": "sample"})))
        .expect(1)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_secs(600));
    let data = accessor.get().await.unwrap();
    assert_eq!(data["metrics"], "sample");
    assert!(accessor.is_fresh().await);
}

#[tokio::test]
async fn test_calls_within_ttl_hit_network_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metrics": "sample"})))
        .expect(1)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_secs(600));
    let first = accessor.get().await;
    let second = accessor.get().await;

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_misses_share_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"metrics": "sample"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_secs(600));
    let (a, b, c) = tokio::join!(accessor.get(), accessor.get(), accessor.get());

    assert!(a.is_some());
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[tokio::test]
async fn test_failure_returns_none_and_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_secs(600));
    assert!(accessor.get().await.is_none());
    assert!(!accessor.is_fresh().await);

    // Next call retries the network
    assert!(accessor.get().await.is_none());
}

#[tokio::test]
async fn test_recovers_after_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"profile": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_secs(600));
    assert!(accessor.get().await.is_none());
    assert_eq!(accessor.get().await, Some(json!({"profile": {}})));
    // Served from cache
    assert_eq!(accessor.get().await, Some(json!({"profile": {}})));
}

#[tokio::test]
async fn test_refetches_after_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metrics": "sample"})))
        .expect(2)
        .mount(&server)
        .await;

    let accessor = accessor(&server, Duration::from_millis(200));
    assert!(accessor.get().await.is_some());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!accessor.is_fresh().await);

    assert!(accessor.get().await.is_some());
    assert!(accessor.is_fresh().await);
}
