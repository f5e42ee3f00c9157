//! End-to-end tests driving a real logging service with the client.

use std::sync::Arc;
use std::time::Duration;

use lognet_client::{Client, ClientConfig, ClientError};
use lognet_core::{LogLevel, Registry};
use lognet_server::{LoggingService, ServerConfig};
use tokio::net::TcpListener;

/// Spawns the service on an ephemeral port; returns its base URL and a
/// handle to the injected registry.
async fn spawn_service() -> (String, Arc<Registry>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let registry = Arc::new(Registry::default());
    let service = LoggingService::new(ServerConfig::new(addr), Arc::clone(&registry));
    let router = service.router();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    (format!("http://{addr}"), registry)
}

fn quick_config() -> ClientConfig {
    ClientConfig::default().with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn connect_ping_and_log_round_trip() {
    let (endpoint, registry) = spawn_service().await;

    let client = Client::connect("svc1", &endpoint, quick_config())
        .await
        .expect("connect");

    assert!(client.ping().await.expect("ping").is_success());

    let outcome = client.log("hello", LogLevel::Error).await.expect("log");
    assert!(outcome.is_success());

    let logs = registry.retrieve("svc1");
    assert_eq!(logs.len(), 1);
    assert!(logs[0].to_string().ends_with("ERROR] hello"));
}

#[tokio::test]
async fn retrieve_over_http_returns_rendered_lines() {
    let (endpoint, _registry) = spawn_service().await;

    let client = Client::connect("svc1", &endpoint, quick_config())
        .await
        .expect("connect");
    client.log("boot", LogLevel::Info).await.expect("log");

    let response = reqwest::get(format!("{endpoint}/retrieve?id=svc1"))
        .await
        .expect("retrieve");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let json: serde_json::Value = response.json().await.expect("json");
    let logs = json["logs"].as_array().expect("logs array");
    assert_eq!(logs.len(), 1);
    assert!(logs[0].as_str().expect("line").ends_with("[INFO] boot"));
}

#[tokio::test]
async fn trailing_slash_endpoint_is_normalized() {
    let (endpoint, _registry) = spawn_service().await;

    let client = Client::connect("svc1", format!("{endpoint}/"), quick_config())
        .await
        .expect("connect");
    assert_eq!(client.endpoint(), endpoint);
    assert!(client.ping().await.expect("ping").is_success());
}

#[tokio::test]
async fn connect_fails_against_unreachable_endpoint() {
    // Grab a free port, then close the listener so nothing answers there.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = Client::connect("svc1", format!("http://{addr}"), quick_config()).await;
    assert!(matches!(
        result,
        Err(ClientError::Unreachable { .. })
    ));
}

#[tokio::test]
async fn unknown_path_classifies_as_failure() {
    let (endpoint, _registry) = spawn_service().await;

    let client = Client::connect("svc1", &endpoint, quick_config())
        .await
        .expect("connect");

    let outcome = client.ping_at("no-such-path").await.expect("call completes");
    assert!(!outcome.is_success());
    let failure = outcome.failure().expect("failure details");
    assert_eq!(failure.status, reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn two_clients_interleave_without_losing_entries() {
    let (endpoint, registry) = spawn_service().await;

    let cli1 = Client::connect("svc1", &endpoint, quick_config())
        .await
        .expect("connect cli1");
    let cli2 = Client::connect("svc1", &endpoint, quick_config())
        .await
        .expect("connect cli2");

    let task1 = tokio::spawn(async move {
        for i in 0..20 {
            cli1.log(&format!("one {i}"), LogLevel::Info)
                .await
                .expect("log");
        }
    });
    let task2 = tokio::spawn(async move {
        for i in 0..20 {
            cli2.log(&format!("two {i}"), LogLevel::Info)
                .await
                .expect("log");
        }
    });
    task1.await.expect("task1");
    task2.await.expect("task2");

    assert_eq!(registry.retrieve("svc1").len(), 40);
}
