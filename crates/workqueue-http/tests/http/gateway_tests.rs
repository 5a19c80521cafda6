use super::test_utilities::{MockEventService, unreachable_host};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use workqueue::{ClientConfig, JsonObject, TransportError, WorkQueueError};
use workqueue_http::{EventGateway, REGISTER_CONSUMER_PATH};

fn gateway(host: &str) -> EventGateway {
    EventGateway::new(reqwest::Client::new(), host, CancellationToken::new())
}

#[tokio::test]
async fn test_body_round_trips_as_json() {
    let service = MockEventService::start().await;
    let gw = gateway(&service.base_url);

    let payload = json!({"name": "n"});
    let url = gw.endpoint(REGISTER_CONSUMER_PATH);
    gw.send_json(Method::POST, &url, &payload).await.unwrap();

    let request = service.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/event/consumer");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.json(), payload);
}

#[tokio::test]
async fn test_success_response_is_reported_with_body() {
    let service = MockEventService::respond_with(201, "ok").await;
    let payload: JsonObject = serde_json::from_value(json!({"id": 1})).unwrap();

    let response = gateway(&service.base_url)
        .publish_test_event(&payload)
        .await
        .unwrap();
    assert!(response.is_success());
    assert_eq!(response.status, 201);
    assert!(response.to_string().contains("ok"));
    assert_eq!(service.single_request().path, "/event/publisher");
}

#[tokio::test]
async fn test_error_status_is_not_an_error() {
    let service = MockEventService::respond_with(404, "not found").await;
    let payload = JsonObject::new();

    let response = gateway(&service.base_url)
        .register_consumer(&payload)
        .await
        .unwrap();
    assert!(!response.is_success());
    let printed = response.to_string();
    assert!(printed.contains("404"));
    assert!(printed.contains("not found"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let host = unreachable_host();
    let result = gateway(&host).register_consumer(&JsonObject::new()).await;
    match result {
        Err(WorkQueueError::Transport(TransportError::RequestFailed { url, .. })) => {
            assert_eq!(url, format!("{host}/event/consumer"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_before_send_makes_no_request() {
    let service = MockEventService::start().await;
    let cancel = CancellationToken::new();
    cancel.cancel();
    let gw = EventGateway::new(reqwest::Client::new(), service.base_url.clone(), cancel);

    let result = gw.register_consumer(&JsonObject::new()).await;
    assert!(matches!(
        result,
        Err(WorkQueueError::Transport(TransportError::Cancelled { .. }))
    ));
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_cancellation_aborts_stalled_request() {
    let service = MockEventService::stalled(Duration::from_secs(30)).await;
    let cancel = CancellationToken::new();
    let gw = EventGateway::new(reqwest::Client::new(), service.base_url.clone(), cancel.clone());

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        gw.register_consumer(&JsonObject::new()),
    )
    .await
    .expect("cancelled request should return promptly");
    assert!(matches!(
        result,
        Err(WorkQueueError::Transport(TransportError::Cancelled { .. }))
    ));
}

#[tokio::test]
async fn test_configured_timeout_fails_without_retry() {
    let service = MockEventService::stalled(Duration::from_secs(30)).await;
    let config = ClientConfig {
        default_host: service.base_url.clone(),
        timeout: Some(Duration::from_secs(1)),
    };
    let gw = EventGateway::from_config(&config, service.base_url.clone(), CancellationToken::new())
        .unwrap();

    let result = gw.register_consumer(&JsonObject::new()).await;
    assert!(matches!(
        result,
        Err(WorkQueueError::Transport(TransportError::RequestFailed { .. }))
    ));
    assert_eq!(service.request_count(), 1);
}
